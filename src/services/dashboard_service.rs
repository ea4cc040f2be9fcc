use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{
    Activity, ActivityKind, DashboardSummary, IncidentPoint, RouteStats, StaffStats, Timeframe,
    VehicleStats,
};

/// Resumen del dashboard (mock). El periodo se registra pero no cambia los datos.
pub fn fetch_dashboard_summary(company_id: &str, timeframe: Timeframe) -> DashboardSummary {
    log::debug!(
        "📊 Dashboard de la empresa {} (periodo {:?})",
        company_id,
        timeframe
    );
    mock_summary()
}

fn mock_summary() -> DashboardSummary {
    DashboardSummary {
        vehicles: VehicleStats {
            total: 45,
            active: 32,
            maintenance: 8,
            inactive: 5,
        },
        routes: RouteStats {
            total: 78,
            active: 58,
            completed: 12,
            suspended: 8,
        },
        staff: StaffStats {
            total: 112,
            drivers: 48,
            helpers: 32,
            operators: 15,
            others: 17,
        },
        incidents: [3, 1, 0, 2, 5, 2, 1]
            .into_iter()
            .zip(1u32..)
            .filter_map(|(count, day)| {
                Some(IncidentPoint {
                    date: NaiveDate::from_ymd_opt(2023, 5, day)?,
                    count,
                })
            })
            .collect(),
        recent_activity: vec![
            activity(1, ActivityKind::RouteCompleted, "Ruta BOG-MED completada", (7, 15, 30)),
            activity(
                2,
                ActivityKind::MaintenanceScheduled,
                "Mantenimiento programado para vehículo ABC-123",
                (7, 14, 20),
            ),
            activity(3, ActivityKind::DriverAssigned, "Conductor asignado a ruta BOG-CTG", (7, 12, 10)),
            activity(4, ActivityKind::IncidentReported, "Incidente reportado en ruta MED-CTG", (7, 10, 5)),
            activity(5, ActivityKind::VehicleAdded, "Nuevo vehículo registrado XYZ-789", (6, 16, 45)),
        ],
    }
}

/// Actividad del 2023-05-`day` a las `hour:minute` UTC
fn activity(id: u32, kind: ActivityKind, description: &str, (day, hour, minute): (u32, u32, u32)) -> Activity {
    Activity {
        id,
        kind,
        description: description.to_string(),
        timestamp: Utc
            .with_ymd_and_hms(2023, 5, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
    }
}
