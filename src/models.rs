// The profile a visitor submits from the landing page. Nothing here is
// persisted; a `SubmittedProfile` lives for a single request.

use rocket::form::FromForm;
use serde::Serialize;

/// Raw form fields posted to `/`. Every field is optional and may repeat;
/// the last value sent for a field wins.
#[derive(Clone, Debug, Default, FromForm)]
pub struct ProfileForm {
    pub fname: Vec<String>,
    pub lname: Vec<String>,
    pub propic: Vec<String>,
    pub twitter: Vec<String>,
    pub facebook: Vec<String>,
    pub google: Vec<String>,
}

/// Last value of a repeated field, or "" when it was never sent.
fn last(mut values: Vec<String>) -> String {
    values.pop().unwrap_or_default()
}

/// The record handed to the dashboard template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubmittedProfile {
    pub name: String,
    #[serde(rename = "profilepic")]
    pub profile_picture: String,
    pub twitter: String,
    pub facebook: String,
    pub google: String,
}

impl From<ProfileForm> for SubmittedProfile {
    /// Missing fields become empty strings. The name is always
    /// "<first> <last>", so two missing halves still give a single space.
    fn from(form: ProfileForm) -> Self {
        SubmittedProfile {
            name: format!("{} {}", last(form.fname), last(form.lname)),
            profile_picture: last(form.propic),
            twitter: last(form.twitter),
            facebook: last(form.facebook),
            google: last(form.google),
        }
    }
}
