use routify_admin::config::CONFIG;
use routify_admin::App;

fn main() {
    // Panics legibles en la consola del navegador
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Routify Admin ({}) iniciando...", CONFIG.environment);
    log::debug!("🌐 Backend configurado (sin uso): {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
