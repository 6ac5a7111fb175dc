use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::Template;

pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;

/// Build the application: the `(method, path)` routing table plus the
/// template engine and its startup check.
pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .attach(Template::fairing())
        .attach(config::TemplateCheck::fairing())
        .mount("/", routes![
            routes::home::landing,
            routes::home::submit
        ])
}
