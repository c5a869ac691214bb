use actix_web::{App, HttpServer, middleware, web};
use citylook::config::{self, Config};
use clap::Parser;

mod configrefs;
mod api;
mod ui;
mod server;

/// Web front-end for looking up cities in a JSON dataset through an
/// embedded DuckDB database.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "dev-config.yaml")]
    config: String,
}

fn cfg_factory(path: &str) -> Result<Box<dyn Config>, String> {
    Ok(Box::new(config::file::new(path.to_owned())?))
}

#[actix_web::main]
async fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let global_cfg = cfg_factory(&args.config)?;
    let cfg_path = args.config.clone();
    HttpServer::new(move || {
        let data_cfg_path = cfg_path.clone();
        let app = App::new()
            .data_factory(move || {
                let path = data_cfg_path.clone();
                async move { server::State::new(cfg_factory(&path)?) }
            })
            .wrap(middleware::Logger::default())
            .default_service(web::to(api::notfound::get));

        // no way to handle errors properly here
        let cfg = cfg_factory(&cfg_path).unwrap();
        let root_path =
            config::get_ref(cfg.as_ref(), &configrefs::SERVER_ROOT_PATH)
                .unwrap()
                .trim_end_matches('/').to_string();
        let api_service = api::service(cfg.as_ref()).unwrap();
        let ui_service = ui::service(cfg.as_ref()).unwrap();
        app.service(web::scope(&root_path)
            .service(api_service).service(ui_service))
    })
        .bind(server::addr(global_cfg.as_ref())?)
        .map_err(|e| format!("error binding port: {e}"))?
        .run()
        .await
        .map_err(|e| format!("error initialising or interrupted: {e}"))
}
