// ============================================================================
// COMPANY DASHBOARD - Tarjetas de resumen, incidentes y actividad reciente
// ============================================================================

use yew::prelude::*;

use crate::models::{Activity, ActivityCategory, Company, IncidentPoint, Timeframe};
use crate::services::fetch_dashboard_summary;

#[derive(Properties, PartialEq)]
pub struct CompanyDashboardProps {
    pub company: Company,
}

#[function_component(CompanyDashboard)]
pub fn company_dashboard(props: &CompanyDashboardProps) -> Html {
    let timeframe = use_state(Timeframe::default);

    let summary = {
        let company_id = props.company.id.clone();
        use_memo((company_id, *timeframe), |(company_id, timeframe)| {
            fetch_dashboard_summary(company_id, *timeframe)
        })
    };

    let vehicles = &summary.vehicles;
    let routes = &summary.routes;
    let staff = &summary.staff;

    html! {
        <div class="company-dashboard">
            <div class="dashboard-title">
                <h2>{format!("Dashboard - {}", props.company.name)}</h2>
                <div class="tabs-list">
                    { for Timeframe::ALL.iter().map(|option| {
                        let option = *option;
                        let timeframe = timeframe.clone();
                        let class = classes!("tab-trigger", (*timeframe == option).then_some("active"));
                        html! {
                            <button type="button" {class} onclick={Callback::from(move |_: MouseEvent| timeframe.set(option))}>
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="stats-grid">
                { stat_card(
                    "Vehículos",
                    vehicles.total,
                    &[("Activos", vehicles.active), ("Mantenimiento", vehicles.maintenance), ("Inactivos", vehicles.inactive)],
                ) }
                { stat_card(
                    "Rutas",
                    routes.total,
                    &[("Activas", routes.active), ("Completadas", routes.completed), ("Suspendidas", routes.suspended)],
                ) }
                { stat_card(
                    "Personal",
                    staff.total,
                    &[
                        ("Conductores", staff.drivers),
                        ("Ayudantes", staff.helpers),
                        ("Operadores", staff.operators),
                        ("Otros", staff.others),
                    ],
                ) }
            </div>

            <div class="dashboard-panels">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">{"Incidentes"}</h3>
                    </div>
                    <div class="card-content">{ incident_chart(&summary.incidents) }</div>
                </div>
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">{"Actividad Reciente"}</h3>
                    </div>
                    <div class="card-content activity-list">
                        { for summary.recent_activity.iter().map(activity_row) }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stat_card(title: &str, total: u32, breakdown: &[(&str, u32)]) -> Html {
    html! {
        <div class="card stat-card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
            </div>
            <div class="card-content">
                <div class="stat-total">{total}</div>
                <ul class="stat-breakdown">
                    { for breakdown.iter().map(|(label, value)| html! {
                        <li><span>{*label}</span><strong>{*value}</strong></li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

/// Barras verticales con altura relativa al máximo del periodo
fn incident_chart(points: &[IncidentPoint]) -> Html {
    let max = points.iter().map(|point| point.count).max().unwrap_or(0).max(1);

    html! {
        <div class="incident-chart">
            { for points.iter().map(|point| {
                let height = point.count * 100 / max;
                html! {
                    <div class="incident-bar" title={format!("{} incidentes", point.count)}>
                        <div class="bar-fill" style={format!("height: {}%", height)}></div>
                        <span class="bar-label">{point.tick_label()}</span>
                    </div>
                }
            }) }
        </div>
    }
}

fn activity_row(activity: &Activity) -> Html {
    let (icon, class) = match activity.kind.category() {
        ActivityCategory::Incident => ("⚠️", "activity-incident"),
        ActivityCategory::Route => ("🗺️", "activity-route"),
        ActivityCategory::Vehicle => ("🚌", "activity-vehicle"),
        ActivityCategory::Staff => ("👤", "activity-staff"),
    };

    html! {
        <div class={classes!("activity-item", class)} key={activity.id.to_string()}>
            <span class="activity-icon">{icon}</span>
            <div class="activity-body">
                <p>{&activity.description}</p>
                <time>{activity.timestamp.format("%d/%m/%Y %H:%M").to_string()}</time>
            </div>
        </div>
    }
}
