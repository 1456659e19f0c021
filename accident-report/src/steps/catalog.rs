//! The fixed catalog of analysis steps, in report order

use super::charts::{self, COUNT_LABEL};
use super::{Requirement, Step, StepContext};
use crate::artifact::{ArtifactBody, ChartData, ChartKind, ChartSpec, ScatterPoint, Section};
use crate::columns as col;
use crate::derive::{AGE_GROUPS, WEEKDAYS};
use crate::stats;
use crate::types::Value;

const PREVIEW_ROWS: usize = 5;

pub static CATALOG: &[Step] = &[
    // 0. Overview
    Step {
        id: "dataset_preview",
        section: Section::Overview,
        requires: Requirement::NONE,
        skip_note: None,
        run: dataset_preview,
    },
    Step {
        id: "dataset_info",
        section: Section::Overview,
        requires: Requirement::NONE,
        skip_note: None,
        run: dataset_info,
    },
    // 1. Frequency over time
    Step {
        id: "total_accidents",
        section: Section::Temporal,
        requires: Requirement::NONE,
        skip_note: None,
        run: total_accidents,
    },
    Step {
        id: "accidents_per_year",
        section: Section::Temporal,
        requires: Requirement::all(&[col::YEAR]),
        skip_note: None,
        run: accidents_per_year,
    },
    Step {
        id: "accidents_per_month",
        section: Section::Temporal,
        requires: Requirement::all(&[col::MONTH]),
        skip_note: None,
        run: accidents_per_month,
    },
    Step {
        id: "accidents_by_weekday",
        section: Section::Temporal,
        requires: Requirement::all(&[col::DAY_OF_WEEK]),
        skip_note: None,
        run: accidents_by_weekday,
    },
    Step {
        id: "accidents_by_hour",
        section: Section::Temporal,
        requires: Requirement::all(&[col::HOUR]),
        skip_note: None,
        run: accidents_by_hour,
    },
    Step {
        id: "daily_accidents",
        section: Section::Temporal,
        requires: Requirement::all(&[col::DATE]),
        skip_note: None,
        run: daily_accidents,
    },
    // 2. Geography
    Step {
        id: "top_cities",
        section: Section::Geographic,
        requires: Requirement::all(&[col::CITY]),
        skip_note: None,
        run: top_cities,
    },
    Step {
        id: "top_intersections",
        section: Section::Geographic,
        requires: Requirement::all(&[col::INTERSECTION]),
        skip_note: None,
        run: top_intersections,
    },
    Step {
        id: "region_distribution",
        section: Section::Geographic,
        requires: Requirement::all(&[col::REGION]),
        skip_note: None,
        run: region_distribution,
    },
    Step {
        id: "geographic_hotspots",
        section: Section::Geographic,
        requires: Requirement::all(&[col::LATITUDE, col::LONGITUDE]),
        skip_note: None,
        run: geographic_hotspots,
    },
    // 3. Severity
    Step {
        id: "severity_distribution",
        section: Section::Severity,
        requires: Requirement::all(&[col::SEVERITY]),
        skip_note: None,
        run: severity_distribution,
    },
    Step {
        id: "fatal_percentage",
        section: Section::Severity,
        requires: Requirement::all(&[col::SEVERITY]),
        skip_note: None,
        run: fatal_percentage,
    },
    Step {
        id: "serious_percentage",
        section: Section::Severity,
        requires: Requirement::all(&[col::SEVERITY]),
        skip_note: None,
        run: serious_percentage,
    },
    Step {
        id: "severity_by_hour",
        section: Section::Severity,
        requires: Requirement::all(&[col::SEVERITY_NUMERIC, col::HOUR]),
        skip_note: None,
        run: severity_by_hour,
    },
    Step {
        id: "severity_by_region",
        section: Section::Severity,
        requires: Requirement::all(&[col::SEVERITY_NUMERIC, col::REGION]),
        skip_note: None,
        run: severity_by_region,
    },
    Step {
        id: "severity_time_correlation",
        section: Section::Severity,
        requires: Requirement::all_and_any(&[col::SEVERITY_NUMERIC], &[col::HOUR, col::MONTH]),
        skip_note: None,
        run: severity_time_correlation,
    },
    // 4. Demographics
    Step {
        id: "age_distribution",
        section: Section::Demographic,
        requires: Requirement::all(&[col::AGE]),
        skip_note: None,
        run: age_distribution,
    },
    Step {
        id: "gender_distribution",
        section: Section::Demographic,
        requires: Requirement::all(&[col::GENDER]),
        skip_note: None,
        run: gender_distribution,
    },
    Step {
        id: "age_group_frequency",
        section: Section::Demographic,
        requires: Requirement::all(&[col::AGE_GROUP]),
        skip_note: None,
        run: age_group_frequency,
    },
    Step {
        id: "age_by_gender",
        section: Section::Demographic,
        requires: Requirement::all(&[col::GENDER, col::AGE]),
        skip_note: None,
        run: age_by_gender,
    },
    // 5. Environment
    Step {
        id: "weather_conditions",
        section: Section::Environmental,
        requires: Requirement::all(&[col::WEATHER]),
        skip_note: None,
        run: weather_conditions,
    },
    Step {
        id: "road_types",
        section: Section::Environmental,
        requires: Requirement::all(&[col::ROAD_TYPE]),
        skip_note: None,
        run: road_types,
    },
    Step {
        id: "lighting_conditions",
        section: Section::Environmental,
        requires: Requirement::all(&[col::LIGHTING]),
        skip_note: None,
        run: lighting_conditions,
    },
    // 6. Vehicle and driver
    Step {
        id: "vehicle_types",
        section: Section::VehicleDriver,
        requires: Requirement::all(&[col::VEHICLE_TYPE]),
        skip_note: None,
        run: vehicle_types,
    },
    Step {
        id: "severity_by_vehicle_type",
        section: Section::VehicleDriver,
        requires: Requirement::all(&[col::VEHICLE_TYPE, col::SEVERITY]),
        skip_note: None,
        run: severity_by_vehicle_type,
    },
    Step {
        id: "driver_experience",
        section: Section::VehicleDriver,
        requires: Requirement::all(&[col::DRIVER_EXPERIENCE]),
        skip_note: None,
        run: driver_experience,
    },
    Step {
        id: "speeding",
        section: Section::VehicleDriver,
        requires: Requirement::all(&[col::SPEEDING]),
        skip_note: None,
        run: speeding,
    },
    Step {
        id: "seatbelt_usage",
        section: Section::VehicleDriver,
        requires: Requirement::all(&[col::SEATBELT_USAGE]),
        skip_note: None,
        run: seatbelt_usage,
    },
    // 7. Temporal patterns
    Step {
        id: "peak_hours",
        section: Section::TemporalPatterns,
        requires: Requirement::all(&[col::HOUR]),
        skip_note: None,
        run: peak_hours,
    },
    Step {
        id: "peak_weekdays",
        section: Section::TemporalPatterns,
        requires: Requirement::all(&[col::DAY_OF_WEEK]),
        skip_note: None,
        run: peak_weekdays,
    },
    Step {
        id: "weekday_vs_weekend",
        section: Section::TemporalPatterns,
        requires: Requirement::all(&[col::IS_WEEKEND]),
        skip_note: None,
        run: weekday_vs_weekend,
    },
    Step {
        id: "seasonal_variation",
        section: Section::TemporalPatterns,
        requires: Requirement::all(&[col::MONTH]),
        skip_note: None,
        run: seasonal_variation,
    },
    // 8. Contributing factors
    Step {
        id: "top_contributing_factors",
        section: Section::ContributingFactors,
        requires: Requirement::all(&[col::CONTRIBUTING_FACTORS]),
        skip_note: None,
        run: top_contributing_factors,
    },
    Step {
        id: "factors_by_severity",
        section: Section::ContributingFactors,
        requires: Requirement::all(&[col::CONTRIBUTING_FACTORS, col::SEVERITY]),
        skip_note: None,
        run: factors_by_severity,
    },
    Step {
        id: "factors_by_region",
        section: Section::ContributingFactors,
        requires: Requirement::all(&[col::CONTRIBUTING_FACTORS, col::REGION]),
        skip_note: None,
        run: factors_by_region,
    },
    // 9. Injury and fatality
    Step {
        id: "road_user_distribution",
        section: Section::InjuryFatality,
        requires: Requirement::all_and_any(&[col::ROAD_USER], &[col::INJURY_COUNT, col::FATALITY_COUNT]),
        skip_note: Some(
            "Column 'Road_User' not found; cannot analyze injury/fatality distribution by road user.",
        ),
        run: road_user_distribution,
    },
    Step {
        id: "injuries_by_vehicle_type",
        section: Section::InjuryFatality,
        requires: Requirement::all(&[col::INJURY_COUNT, col::VEHICLE_TYPE]),
        skip_note: None,
        run: injuries_by_vehicle_type,
    },
    Step {
        id: "fatalities_by_speeding",
        section: Section::InjuryFatality,
        requires: Requirement::all(&[col::FATALITY_COUNT, col::SPEEDING]),
        skip_note: None,
        run: fatalities_by_speeding,
    },
    // 10. Comparative
    Step {
        id: "region_by_year",
        section: Section::Comparative,
        requires: Requirement::all(&[col::REGION, col::YEAR]),
        skip_note: None,
        run: region_by_year,
    },
    Step {
        id: "urban_vs_rural",
        section: Section::Comparative,
        requires: Requirement::all(&[col::AREA_TYPE]),
        skip_note: Some(
            "Column 'Area_Type' not found. If available, compare urban vs. rural accident characteristics.",
        ),
        run: urban_vs_rural,
    },
    Step {
        id: "external_comparison_note",
        section: Section::Comparative,
        requires: Requirement::NONE,
        skip_note: None,
        run: external_comparison_note,
    },
];

fn chart(spec: Option<ChartSpec>) -> Option<ArtifactBody> {
    spec.map(ArtifactBody::Chart)
}

fn statistic(label: &str, value: Option<f64>, unit: Option<&str>) -> Option<ArtifactBody> {
    Some(ArtifactBody::Statistic {
        label: label.to_string(),
        value,
        unit: unit.map(str::to_string),
    })
}

/// Bar chart of a column's frequencies, most frequent first
fn ranked_bar(ctx: &StepContext<'_>, column: &str, title: &str) -> Option<ArtifactBody> {
    let entries = stats::value_counts(ctx.values(column));
    chart(charts::frequencies(ChartKind::Bar, title, column, entries))
}

/// Bar chart of the `top_k` most frequent values of a column
fn top_bar(ctx: &StepContext<'_>, column: &str, subject: &str) -> Option<ArtifactBody> {
    let k = ctx.config.top_k.max(1);
    let entries = stats::top_k(stats::value_counts(ctx.values(column)), k);
    let title = format!("Top {} {} with Highest Accident Frequency", k, subject);
    chart(charts::frequencies(ChartKind::Bar, title, column, entries).map(|c| c.with_top_k(k)))
}

/// Count chart in the column's natural axis order
fn count_plot(ctx: &StepContext<'_>, column: &str, title: &str, xlabel: &str) -> Option<ArtifactBody> {
    let entries = stats::category_counts(ctx.values(column));
    chart(
        charts::frequencies(ChartKind::Count, title, column, entries)
            .map(|c| c.with_labels(xlabel, COUNT_LABEL)),
    )
}

/// Count chart over a fixed axis order
fn ordered_count_plot(ctx: &StepContext<'_>, column: &str, order: &[&str], title: &str) -> Option<ArtifactBody> {
    let order_values: Vec<Value> = order.iter().map(|s| Value::text(*s)).collect();
    let entries = stats::counts_in_order(ctx.values(column), &order_values);
    let order: Vec<String> = order.iter().map(|s| s.to_string()).collect();
    chart(charts::frequencies(ChartKind::Count, title, column, entries).map(|c| c.with_order(order)))
}

/// Bar chart of a column's frequencies sorted by value
fn sorted_bar(ctx: &StepContext<'_>, column: &str, title: &str) -> Option<ArtifactBody> {
    let entries = stats::sort_by_value(stats::value_counts(ctx.values(column)));
    chart(charts::frequencies(ChartKind::Bar, title, column, entries))
}

fn dataset_preview(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    if ctx.dataset.column_count() == 0 {
        return None;
    }
    Some(ArtifactBody::Table {
        title: format!("First {} rows of the dataset", PREVIEW_ROWS.min(ctx.dataset.row_count())),
        columns: ctx.dataset.column_names().map(str::to_string).collect(),
        rows: ctx.dataset.head(PREVIEW_ROWS),
    })
}

fn dataset_info(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    if ctx.dataset.column_count() == 0 {
        return None;
    }
    let rows = ctx
        .dataset
        .columns()
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.non_missing().to_string(),
                c.inferred_type().to_string(),
            ]
        })
        .collect();
    Some(ArtifactBody::Table {
        title: "Dataset Info".to_string(),
        columns: vec!["Column".into(), "Non-Missing".into(), "Type".into()],
        rows,
    })
}

fn total_accidents(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    statistic(
        "Total number of accidents recorded",
        Some(ctx.dataset.row_count() as f64),
        None,
    )
}

fn accidents_per_year(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    sorted_bar(ctx, col::YEAR, "Number of Accidents per Year")
}

fn accidents_per_month(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    sorted_bar(ctx, col::MONTH, "Number of Accidents per Month")
}

fn accidents_by_weekday(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ordered_count_plot(ctx, col::DAY_OF_WEEK, &WEEKDAYS, "Number of Accidents by Day of the Week")
}

fn accidents_by_hour(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(ctx, col::HOUR, "Number of Accidents by Hour of the Day", "Hour of Day")
}

fn daily_accidents(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let entries = stats::sort_by_value(stats::value_counts(ctx.values(col::DATE)));
    chart(
        charts::frequencies(ChartKind::Line, "Daily Accident Frequency Over Time", col::DATE, entries)
            .map(|c| c.with_labels(col::DATE, COUNT_LABEL)),
    )
}

fn top_cities(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    top_bar(ctx, col::CITY, "Cities")
}

fn top_intersections(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    top_bar(ctx, col::INTERSECTION, "Intersections")
}

fn region_distribution(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ranked_bar(ctx, col::REGION, "Accident Distribution by Region/Zone")
}

fn geographic_hotspots(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let hues = ctx.dataset.values(col::SEVERITY);
    let points: Vec<ScatterPoint> = ctx
        .values(col::LONGITUDE)
        .iter()
        .zip(ctx.values(col::LATITUDE))
        .enumerate()
        .filter_map(|(row, (lon, lat))| {
            let (x, y) = (lon.as_f64()?, lat.as_f64()?);
            let hue = hues
                .and_then(|h| h.get(row))
                .filter(|v| !v.is_missing())
                .cloned();
            Some(ScatterPoint { x, y, hue })
        })
        .collect();
    if points.is_empty() {
        return None;
    }

    let mut spec = ChartSpec::new(
        ChartKind::Scatter,
        "Geographical Hotspots of Accidents",
        col::LONGITUDE,
        ChartData::Points { points },
    )
    .with_y(col::LATITUDE);
    if hues.is_some() {
        spec = spec.with_hue(col::SEVERITY);
    }
    chart(Some(spec))
}

fn severity_distribution(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let entries = stats::value_counts(ctx.values(col::SEVERITY));
    let order = charts::labels(&entries);
    chart(
        charts::frequencies(ChartKind::Count, "Distribution of Accident Severities", col::SEVERITY, entries)
            .map(|c| c.with_order(order)),
    )
}

/// Share of non-missing severity values equal to `level`
fn severity_share(ctx: &StepContext<'_>, level: &str) -> Option<f64> {
    let severity = ctx.values(col::SEVERITY);
    stats::percentage(stats::count_text(severity, level), stats::count_present(severity))
}

fn fatal_percentage(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    statistic(
        "Percentage of Fatal Accidents",
        severity_share(ctx, "Fatal"),
        Some("%"),
    )
}

fn serious_percentage(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    statistic(
        "Percentage of Serious Accidents",
        severity_share(ctx, "Serious"),
        Some("%"),
    )
}

fn severity_box(ctx: &StepContext<'_>, x: &str, title: &str, xlabel: &str) -> Option<ArtifactBody> {
    let summaries = stats::grouped_distributions(ctx.values(x), ctx.values(col::SEVERITY_NUMERIC));
    chart(
        charts::distributions(title, x, col::SEVERITY_NUMERIC, summaries)
            .map(|c| c.with_labels(xlabel, "Severity (1=Minor, 3=Fatal)")),
    )
}

fn severity_by_hour(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    severity_box(ctx, col::HOUR, "Accident Severity by Hour of the Day", "Hour of Day")
}

fn severity_by_region(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    severity_box(ctx, col::REGION, "Accident Severity by Region", col::REGION)
}

fn severity_time_correlation(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let fields: Vec<(&str, &[Value])> = [col::SEVERITY_NUMERIC, col::HOUR, col::MONTH]
        .into_iter()
        .filter(|name| ctx.has(name))
        .map(|name| (name, ctx.values(name)))
        .collect();
    if fields.len() < 2 {
        return None;
    }
    let matrix = stats::correlation_matrix(&fields);
    let spec = ChartSpec::new(
        ChartKind::Heatmap,
        "Correlation Matrix of Severity and Time Factors",
        col::SEVERITY_NUMERIC,
        ChartData::Correlation(matrix),
    )
    .with_labels("", "");
    chart(Some(spec))
}

fn age_distribution(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let hist = stats::histogram(ctx.values(col::AGE), ctx.config.histogram_bins.max(1));
    chart(charts::histogram(
        "Distribution of Age of Individuals Involved in Accidents",
        col::AGE,
        hist,
    ))
}

fn gender_distribution(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::GENDER,
        "Gender Distribution of Individuals Involved in Accidents",
        col::GENDER,
    )
}

fn age_group_frequency(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let order: Vec<Value> = AGE_GROUPS.iter().map(|g| Value::text(*g)).collect();
    let entries = stats::counts_in_order(ctx.values(col::AGE_GROUP), &order);
    let labels: Vec<String> = AGE_GROUPS.iter().map(|g| g.to_string()).collect();
    chart(
        charts::frequencies(ChartKind::Bar, "Accident Frequency by Age Group", col::AGE_GROUP, entries)
            .map(|c| c.with_order(labels).with_labels("Age Group", COUNT_LABEL)),
    )
}

fn age_by_gender(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let summaries = stats::grouped_distributions(ctx.values(col::GENDER), ctx.values(col::AGE));
    chart(charts::distributions(
        "Age Distribution by Gender",
        col::GENDER,
        col::AGE,
        summaries,
    ))
}

fn weather_conditions(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ranked_bar(ctx, col::WEATHER, "Accident Frequency by Weather Condition")
}

fn road_types(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ranked_bar(ctx, col::ROAD_TYPE, "Accident Frequency by Road Type")
}

fn lighting_conditions(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ranked_bar(ctx, col::LIGHTING, "Accident Frequency by Lighting Condition")
}

fn vehicle_types(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ranked_bar(ctx, col::VEHICLE_TYPE, "Accident Frequency by Vehicle Type")
}

fn severity_by_vehicle_type(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let counts = stats::crosstab(ctx.values(col::VEHICLE_TYPE), ctx.values(col::SEVERITY));
    chart(charts::grouped(
        "Accident Severity by Vehicle Type",
        col::VEHICLE_TYPE,
        col::SEVERITY,
        counts,
    ))
}

fn driver_experience(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let hist = stats::histogram(ctx.values(col::DRIVER_EXPERIENCE), ctx.config.histogram_bins.max(1));
    chart(
        charts::histogram("Distribution of Driver Experience", col::DRIVER_EXPERIENCE, hist)
            .map(|c| c.with_labels("Years of Experience", "Frequency")),
    )
}

fn speeding(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::SPEEDING,
        "Frequency of Accidents Involving Speeding",
        col::SPEEDING,
    )
}

fn seatbelt_usage(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::SEATBELT_USAGE,
        "Frequency of Accidents by Seatbelt Usage",
        "Seatbelt Usage",
    )
}

fn peak_hours(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(ctx, col::HOUR, "Accident Frequency by Hour of the Day", "Hour of Day")
}

fn peak_weekdays(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    ordered_count_plot(ctx, col::DAY_OF_WEEK, &WEEKDAYS, "Accident Frequency by Day of the Week")
}

fn weekday_vs_weekend(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let order = [Value::Bool(false), Value::Bool(true)];
    let entries = stats::counts_in_order(ctx.values(col::IS_WEEKEND), &order);
    chart(
        charts::frequencies(
            ChartKind::Count,
            "Accident Frequency: Weekdays vs. Weekends",
            col::IS_WEEKEND,
            entries,
        )
        .map(|c| c.with_labels("Is Weekend", COUNT_LABEL)),
    )
}

fn seasonal_variation(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::MONTH,
        "Accident Frequency by Month (Seasonal Variation)",
        col::MONTH,
    )
}

fn top_contributing_factors(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let k = ctx.config.top_k.max(1);
    let entries = stats::top_k(stats::value_counts(ctx.values(col::CONTRIBUTING_FACTORS)), k);
    let title = format!("Top {} Contributing Factors to Accidents", k);
    chart(
        charts::frequencies(ChartKind::Bar, title, col::CONTRIBUTING_FACTORS, entries)
            .map(|c| c.with_top_k(k).with_labels("Contributing Factor", COUNT_LABEL)),
    )
}

fn factors_by_severity(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let counts = stats::crosstab(ctx.values(col::CONTRIBUTING_FACTORS), ctx.values(col::SEVERITY));
    chart(charts::grouped(
        "Contributing Factors by Accident Severity",
        col::CONTRIBUTING_FACTORS,
        col::SEVERITY,
        counts,
    ))
}

fn factors_by_region(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let counts = stats::crosstab(ctx.values(col::CONTRIBUTING_FACTORS), ctx.values(col::REGION));
    chart(charts::grouped(
        "Contributing Factors by Region",
        col::CONTRIBUTING_FACTORS,
        col::REGION,
        counts,
    ))
}

fn road_user_distribution(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::ROAD_USER,
        "Accident Frequency by Road User Type",
        "Road User",
    )
}

fn injuries_by_vehicle_type(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let summaries = stats::grouped_distributions(ctx.values(col::VEHICLE_TYPE), ctx.values(col::INJURY_COUNT));
    chart(charts::distributions(
        "Injury Count by Vehicle Type",
        col::VEHICLE_TYPE,
        col::INJURY_COUNT,
        summaries,
    ))
}

fn fatalities_by_speeding(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let summaries = stats::grouped_distributions(ctx.values(col::SPEEDING), ctx.values(col::FATALITY_COUNT));
    chart(charts::distributions(
        "Fatality Count vs. Speeding",
        col::SPEEDING,
        col::FATALITY_COUNT,
        summaries,
    ))
}

fn region_by_year(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    let counts = stats::crosstab(ctx.values(col::REGION), ctx.values(col::YEAR));
    chart(charts::grouped(
        "Accident Frequency by Region and Year",
        col::REGION,
        col::YEAR,
        counts,
    ))
}

fn urban_vs_rural(ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    count_plot(
        ctx,
        col::AREA_TYPE,
        "Accident Frequency: Urban vs. Rural",
        "Area Type",
    )
}

fn external_comparison_note(_ctx: &StepContext<'_>) -> Option<ArtifactBody> {
    Some(ArtifactBody::Note {
        text: "Comparative analysis with external data requires additional datasets. \
               Please incorporate such datasets as needed."
            .to_string(),
    })
}
