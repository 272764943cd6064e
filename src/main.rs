#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{middleware, web::Data, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    use nebula_landing::common::ServerConfig;
    use nebula_landing::frontend::{shell, App};

    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let conf = get_configuration(None)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let addr = config.bind_addr_or(conf.leptos_options.site_addr);

    tracing::info!(%addr, "starting nebula-landing v{}", env!("CARGO_PKG_VERSION"));

    HttpServer::new(move || {
        let routes = generate_route_list(App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();

        actix_web::App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
            .service(Files::new("/", site_root.as_str()))
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-only builds hydrate through `nebula_landing::hydrate`.
}
