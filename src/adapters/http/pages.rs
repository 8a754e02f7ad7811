//! Inline HTML rendering for the profile pages.
//!
//! Pure functions over domain data; no template engine, matching the
//! service's single-file-app heritage. User-supplied strings are escaped
//! before interpolation.

use crate::domain::player::PlayerProfile;
use crate::ports::ProfileListing;

/// Escapes a string for safe interpolation into HTML text and attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Static landing page.
pub fn landing_page() -> String {
    r#"<html>
    <head>
        <title>Player Profile Manager</title>
    </head>
    <body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
        <h1>&#127942; Player Profile Manager &#127942;</h1>
        <p><a href="/create-profile-form" style="font-size: 20px; text-decoration: none; color: blue;">&#10133; Create a Player Profile</a></p>
        <p><a href="/profiles" style="font-size: 20px; text-decoration: none; color: green;">&#128220; View All Profiles</a></p>
    </body>
</html>"#
        .to_string()
}

/// Profile creation form.
pub fn create_form_page() -> String {
    r#"<html>
    <head><title>Create Player Profile</title></head>
    <body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
        <h1>Create a Player Profile</h1>
        <form action="/create-profile/" method="post">
            <label>Name:</label><br><input type="text" name="name" required><br><br>
            <label>Age:</label><br><input type="number" name="age" required><br><br>
            <label>Position:</label><br><input type="text" name="position" required><br><br>
            <label>Force:</label><br><input type="number" name="force" required><br><br>
            <label>Agility:</label><br><input type="number" name="agility" required><br><br>
            <label>Vision:</label><br><input type="number" name="vision" required><br><br>
            <input type="submit" value="Create Profile">
        </form>
    </body>
</html>"#
        .to_string()
}

/// Single profile page.
pub fn profile_page(profile: &PlayerProfile, base_url: &str) -> String {
    let name = escape(&profile.name);
    let position = escape(&profile.position);
    let url = format!("{}/profile/{}", base_url, escape(profile.slug.as_str()));
    format!(
        r#"<html>
    <head><title>{name}'s Profile</title></head>
    <body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
        <h1>{name}'s Profile</h1>
        <p><strong>Profile URL:</strong> <a href="{url}">{url}</a></p>
        <p>Age: {age}</p>
        <p>Position: {position}</p>
        <p>Force: {force}</p>
        <p>Agility: {agility}</p>
        <p>Vision: {vision}</p>
        <p><a href="/profiles">&#127968; Back to Profiles</a></p>
    </body>
</html>"#,
        name = name,
        url = url,
        age = profile.age,
        position = position,
        force = profile.force,
        agility = profile.agility,
        vision = profile.vision,
    )
}

/// Listing page of (name, link) pairs.
pub fn listing_page(listings: &[ProfileListing], base_url: &str) -> String {
    let mut items = String::new();
    for listing in listings {
        items.push_str(&format!(
            "<li><a href=\"{base}/profile/{slug}\">{name}</a></li>",
            base = base_url,
            slug = escape(listing.slug.as_str()),
            name = escape(&listing.name),
        ));
    }
    format!(
        r#"<html>
    <head><title>All Player Profiles</title></head>
    <body style="font-family: Arial, sans-serif; padding: 50px;">
        <h1>All Player Profiles</h1>
        <ul>{items}</ul>
        <p><a href="/">&#127968; Back to Home</a></p>
    </body>
</html>"#,
        items = items,
    )
}

/// Error page with a human-readable message.
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<html>
    <head><title>{title}</title></head>
    <body style="font-family: Arial, sans-serif; text-align: center; padding: 50px;">
        <h1>{title}</h1>
        <p>{message}</p>
        <p><a href="/">&#127968; Back to Home</a></p>
    </body>
</html>"#,
        title = escape(title),
        message = escape(message),
    )
}
