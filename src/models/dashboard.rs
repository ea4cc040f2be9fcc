use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Resumen del panel de control de una empresa
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub vehicles: VehicleStats,
    pub routes: RouteStats,
    pub staff: StaffStats,
    pub incidents: Vec<IncidentPoint>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleStats {
    pub total: u32,
    pub active: u32,
    pub maintenance: u32,
    pub inactive: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStats {
    pub total: u32,
    pub active: u32,
    pub completed: u32,
    pub suspended: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffStats {
    pub total: u32,
    pub drivers: u32,
    pub helpers: u32,
    pub operators: u32,
    pub others: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentPoint {
    pub date: NaiveDate,
    pub count: u32,
}

impl IncidentPoint {
    /// Etiqueta del eje X: `día/mes`
    pub fn tick_label(&self) -> String {
        format!("{}/{}", self.date.day(), self.date.month())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    RouteCompleted,
    MaintenanceScheduled,
    DriverAssigned,
    IncidentReported,
    VehicleAdded,
}

/// Categoría visual de una actividad (icono + color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Incident,
    Route,
    Vehicle,
    Staff,
}

impl ActivityKind {
    pub fn category(self) -> ActivityCategory {
        match self {
            ActivityKind::IncidentReported => ActivityCategory::Incident,
            ActivityKind::RouteCompleted => ActivityCategory::Route,
            ActivityKind::VehicleAdded => ActivityCategory::Vehicle,
            ActivityKind::MaintenanceScheduled | ActivityKind::DriverAssigned => {
                ActivityCategory::Staff
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Selector de periodo del dashboard. No afecta a los datos devueltos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Week => "Semana",
            Timeframe::Month => "Mes",
            Timeframe::Year => "Año",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_label_is_day_slash_month() {
        let point = IncidentPoint {
            date: NaiveDate::from_ymd_opt(2023, 5, 7).unwrap(),
            count: 1,
        };
        assert_eq!(point.tick_label(), "7/5");
    }

    #[test]
    fn test_activity_categories() {
        assert_eq!(ActivityKind::IncidentReported.category(), ActivityCategory::Incident);
        assert_eq!(ActivityKind::RouteCompleted.category(), ActivityCategory::Route);
        assert_eq!(ActivityKind::VehicleAdded.category(), ActivityCategory::Vehicle);
        assert_eq!(ActivityKind::MaintenanceScheduled.category(), ActivityCategory::Staff);
        assert_eq!(ActivityKind::DriverAssigned.category(), ActivityCategory::Staff);
    }

    #[test]
    fn test_activity_kind_wire_names() {
        let json = serde_json::to_string(&ActivityKind::MaintenanceScheduled).unwrap();
        assert_eq!(json, "\"maintenance_scheduled\"");
        let kind: ActivityKind = serde_json::from_str("\"incident_reported\"").unwrap();
        assert_eq!(kind, ActivityKind::IncidentReported);
    }
}
