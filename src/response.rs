use crate::models::SubmittedProfile;

/// Context for pages that render without data.
pub fn empty_context() -> tera::Context {
    tera::Context::new()
}

/// Context for the dashboard: the submitted profile, exposed as `user`.
pub fn profile_context(profile: &SubmittedProfile) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("user", profile);
    context
}
