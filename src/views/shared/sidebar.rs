use yew::prelude::*;

/// Entradas de navegación (nombre, ruta). Solo "Inicio" está implementada.
const NAVIGATION: [(&str, &str); 7] = [
    ("Inicio", "/dashboard"),
    ("Rutas", "/dashboard/routes"),
    ("Vehículos", "/dashboard/vehicles"),
    ("Personal", "/dashboard/users"),
    ("Programación", "/dashboard/scheduling"),
    ("Reportes", "/dashboard/reports"),
    ("Configuración", "/dashboard/settings"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let collapsed = use_state(|| false);

    let on_toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };

    html! {
        <>
            <button class="sidebar-toggle" onclick={on_toggle}>
                { if *collapsed { "☰" } else { "✕" } }
            </button>
            <aside class={classes!("sidebar", (*collapsed).then_some("collapsed"))}>
                <div class="sidebar-header">
                    <h1>{"Routify"}</h1>
                </div>
                <nav class="sidebar-nav">
                    { for NAVIGATION.iter().enumerate().map(|(index, (name, href))| html! {
                        <span
                            class={classes!("sidebar-link", (index == 0).then_some("active"))}
                            data-href={*href}
                        >
                            {*name}
                        </span>
                    }) }
                </nav>
            </aside>
        </>
    }
}
