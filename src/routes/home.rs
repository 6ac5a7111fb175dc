//! Home routes, mounted at "/"

use log::{debug, error};
use rocket::form::{self, Form};
use rocket::http::Status;
use rocket::{get, post};
use rocket_dyn_templates::Template;

use crate::models::{ProfileForm, SubmittedProfile};
use crate::response::{empty_context, profile_context};

/// Show the landing page.
#[get("/")]
pub async fn landing() -> Template {
    debug!("Rendering landing page");
    Template::render("index", &empty_context().into_json())
}

/// POST-handler for the landing page form. Renders the dashboard with
/// whatever was submitted.
///
/// A missing body, or one that is not a form, is treated like an empty
/// form. A form body that cannot be read (e.g. one over the configured
/// `limits.form`) is refused rather than rendered blank.
#[post("/", data = "<form>")]
pub async fn submit<'r>(
    form: Option<Result<Form<ProfileForm>, form::Errors<'r>>>,
) -> Result<Template, Status> {
    let form = match form {
        Some(Ok(form)) => form.into_inner(),
        Some(Err(errors)) => {
            error!("Could not read profile form: {}", errors);
            return Err(errors.status());
        }
        None => <ProfileForm as Default>::default(),
    };

    let profile = SubmittedProfile::from(form);
    debug!("Rendering dashboard for {:?}", &profile);

    Ok(Template::render("dashboard", &profile_context(&profile).into_json()))
}
