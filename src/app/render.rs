use crate::core::assets::AssetResolver;
use crate::core::links::{detail_route, whatsapp_link};
use crate::domain::model::{Profile, Project, ProjectView};
use crate::utils::error::{CatalogError, Result};
use std::fmt::Write as _;

pub const CSV_HEADER: [&str; 7] = [
    "slug",
    "title",
    "description",
    "tags",
    "github_url",
    "demo_url",
    "image",
];

/// Attaches slugs, detail routes under `base_path` and resolved image paths
/// to matched projects.
pub fn project_views<'a, I>(
    matched: I,
    resolver: &AssetResolver,
    base_path: Option<&str>,
) -> Vec<ProjectView>
where
    I: IntoIterator<Item = (&'a str, &'a Project)>,
{
    matched
        .into_iter()
        .map(|(slug, project)| {
            let asset = resolver.resolve(slug);
            ProjectView {
                slug: slug.to_string(),
                route: detail_route(base_path, slug),
                image: asset.path().to_string(),
                image_is_fallback: asset.is_fallback(),
                project: project.clone(),
            }
        })
        .collect()
}

pub fn render_json(views: &[ProjectView]) -> Result<String> {
    Ok(serde_json::to_string_pretty(views)?)
}

/// One row per project; tags joined with `|`.
pub fn render_csv(views: &[ProjectView]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for view in views {
        let tags = view.project.tags.join("|");
        writer.write_record([
            view.slug.as_str(),
            view.project.title.as_str(),
            view.project.description.as_str(),
            tags.as_str(),
            view.project.github_url.as_deref().unwrap_or(""),
            view.project.demo_url.as_deref().unwrap_or(""),
            view.image.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::ProcessingError {
            message: format!("CSV flush failed: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// Aligned `slug  title  tags` listing for terminals.
pub fn render_table(views: &[ProjectView]) -> String {
    let slug_width = views.iter().map(|v| v.slug.len()).max().unwrap_or(0).max(4);
    let title_width = views
        .iter()
        .map(|v| v.project.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    let _ = writeln!(out, "{:<slug_width$}  {:<title_width$}  TAGS", "SLUG", "TITLE");
    for view in views {
        let _ = writeln!(
            out,
            "{:<slug_width$}  {:<title_width$}  {}",
            view.slug,
            view.project.title,
            view.project.tags.join(", ")
        );
    }
    out
}

fn section(out: &mut String, heading: &str, body: Option<&str>) {
    if let Some(body) = body {
        let _ = writeln!(out, "\n## {}\n{}", heading, body);
    }
}

fn bullets(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n## {}", heading);
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
}

/// Plain-text project detail page.
pub fn render_detail(view: &ProjectView) -> String {
    let project = &view.project;
    let mut out = String::new();

    let _ = writeln!(out, "# {}", project.title);
    let _ = writeln!(out, "{}", project.description);
    if !project.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", project.tags.join(", "));
    }
    let _ = writeln!(out, "Route: {}", view.route);
    let _ = writeln!(out, "Image: {}", view.image);

    let facts: Vec<String> = [
        ("Role", &project.role),
        ("Duration", &project.duration),
        ("Year", &project.year),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_deref().map(|v| format!("{}: {}", label, v)))
    .collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "{}", facts.join(" | "));
    }

    if let Some(github) = &project.github_url {
        let _ = writeln!(out, "Code: {}", github);
    }
    if let Some(demo) = &project.demo_url {
        let _ = writeln!(out, "Demo: {}", demo);
    }

    section(&mut out, "Overview", project.long_description.as_deref());
    section(&mut out, "The Challenge", project.challenge.as_deref());
    section(&mut out, "The Solution", project.solution.as_deref());
    bullets(&mut out, "Key Features", &project.features);

    if !project.tech_stack.is_empty() {
        let _ = writeln!(out, "\n## Tech Stack");
        for group in &project.tech_stack {
            let _ = writeln!(out, "{}: {}", group.category, group.items.join(", "));
        }
    }

    bullets(&mut out, "Impact", &project.impact);
    bullets(&mut out, "Key Learnings", &project.learnings);
    out
}

/// About, skills, experience and contact sections of the portfolio page.
///
/// Fails only when the WhatsApp number cannot be turned into a link.
pub fn render_profile(profile: &Profile) -> Result<String> {
    let site = &profile.site;
    let mut out = String::new();
    if !site.name.is_empty() {
        let _ = writeln!(out, "# {}", site.name);
    }
    if let Some(headline) = &site.headline {
        let _ = writeln!(out, "{}", headline);
    }

    if site.about.is_some() || site.cv_url.is_some() {
        let _ = writeln!(out, "\n## About");
        if let Some(about) = &site.about {
            let _ = writeln!(out, "{}", about);
        }
        if let Some(cv) = &site.cv_url {
            let _ = writeln!(out, "CV: {}", cv);
        }
    }

    if !profile.skills.is_empty() {
        let _ = writeln!(out, "\n## Skills");
        for group in &profile.skills {
            let _ = writeln!(out, "{}: {}", group.category, group.items.join(", "));
        }
    }

    if !profile.experience.is_empty() {
        let _ = writeln!(out, "\n## Experience");
        for job in &profile.experience {
            let _ = writeln!(out, "{} at {} ({})", job.position, job.company, job.period);
            if !job.description.is_empty() {
                let _ = writeln!(out, "  {}", job.description);
            }
        }
    }

    let contact = &site.contact;
    let whatsapp = contact
        .whatsapp_phone
        .as_deref()
        .map(|phone| whatsapp_link(phone, contact.whatsapp_message.as_deref()))
        .transpose()?;
    if contact.email.is_some() || contact.github.is_some() || whatsapp.is_some() {
        let _ = writeln!(out, "\n## Contact");
        if let Some(email) = &contact.email {
            let _ = writeln!(out, "Email: {}", email);
        }
        if let Some(github) = &contact.github {
            let _ = writeln!(out, "GitHub: {}", github);
        }
        if let Some(link) = &whatsapp {
            let _ = writeln!(out, "WhatsApp: {}", link);
        }
    }
    Ok(out)
}
