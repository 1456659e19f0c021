//! Column names understood by the analysis catalog

// Raw input columns
pub const DATE: &str = "Date";
pub const TIME: &str = "Time";
pub const CITY: &str = "City";
pub const INTERSECTION: &str = "Intersection";
pub const REGION: &str = "Region";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";
pub const SEVERITY: &str = "Severity";
pub const AGE: &str = "Age";
pub const GENDER: &str = "Gender";
pub const WEATHER: &str = "Weather";
pub const ROAD_TYPE: &str = "Road_Type";
pub const LIGHTING: &str = "Lighting";
pub const VEHICLE_TYPE: &str = "Vehicle_Type";
pub const DRIVER_EXPERIENCE: &str = "Driver_Experience";
pub const SPEEDING: &str = "Speeding";
pub const SEATBELT_USAGE: &str = "Seatbelt_Usage";
pub const CONTRIBUTING_FACTORS: &str = "Contributing_Factors";
pub const INJURY_COUNT: &str = "Injury_Count";
pub const FATALITY_COUNT: &str = "Fatality_Count";
pub const ROAD_USER: &str = "Road_User";
pub const AREA_TYPE: &str = "Area_Type";

// Derived columns
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const DAY_OF_WEEK: &str = "DayOfWeek";
pub const HOUR: &str = "Hour";
pub const SEVERITY_NUMERIC: &str = "Severity_Numeric";
pub const AGE_GROUP: &str = "Age_Group";
pub const IS_WEEKEND: &str = "Is_Weekend";
