mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            scheduler,
            service::{admin::code::AdminCodeService, steam::cache::SteamCache},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;
        config.summary();

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;

        let admin_code_service = AdminCodeService::new();

        tracing::info!("Starting server");

        // Check for admin users and generate a registration link if none exist
        startup::check_for_admin(&db, &config, &admin_code_service).await?;
        startup::seed_catalog(&db, &config).await;

        let state = AppState::new(
            db,
            http_client,
            oauth_client,
            admin_code_service,
            SteamCache::new(),
            config,
        );

        let scheduler_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = scheduler::steam::start_scheduler(scheduler_state).await {
                tracing::error!("Steam scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(state)
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
