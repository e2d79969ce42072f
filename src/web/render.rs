// HTML rendering for the home page.
// Every dynamic string passes through `escape`.

use crate::content::{Link, PageContext};

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render the full home page.
pub fn home_page(context: &PageContext) -> String {
    let hero = &context.content.hero;

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n<meta name=\"description\" content=\"{}\">\n<script src=\"/static/js/nav.js\" defer></script>\n</head>\n<body>\n",
        escape(hero.name),
        escape(hero.title),
        escape(hero.summary)
    ));

    html.push_str(&navigation(context));
    html.push_str("<main>\n");
    html.push_str(&hero_section(context));
    html.push_str(&skills_section(context));
    html.push_str(&experience_section(context));
    html.push_str(&projects_section(context));
    html.push_str(&github_section(context));
    html.push_str(&assessment_section(context));
    html.push_str(&videos_section(context));
    html.push_str(&contact_section(context));
    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer><p>&copy; {}</p></footer>\n</body>\n</html>\n",
        escape(hero.name)
    ));

    html
}

fn navigation(context: &PageContext) -> String {
    let mut nav = String::from("<header class=\"site-header\">\n");
    nav.push_str(&format!(
        "<a class=\"brand\" href=\"#top\">{}</a>\n",
        escape(context.content.hero.name)
    ));
    nav.push_str(
        "<button class=\"nav-toggle\" aria-controls=\"site-nav\" aria-expanded=\"false\">Menu</button>\n",
    );
    nav.push_str("<nav id=\"site-nav\"><ul>\n");

    let mut anchors = vec![
        ("#skills", "Skills"),
        ("#experience", "Experience"),
        ("#projects", "Projects"),
    ];
    if !context.github_projects.is_empty() {
        anchors.push(("#open-source", "Open Source"));
    }
    if !context.featured_videos.is_empty() {
        anchors.push(("#videos", "Videos"));
    }
    anchors.push(("#contact", "Contact"));

    for (href, label) in anchors {
        nav.push_str(&format!("<li><a href=\"{}\">{}</a></li>\n", href, label));
    }
    nav.push_str("</ul></nav>\n</header>\n");
    nav
}

fn link_list(links: &[Link], class: &str) -> String {
    let mut out = format!("<ul class=\"{}\">\n", class);
    for link in links {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(link.url),
            escape(link.label)
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn bullet_list(items: &[&str]) -> String {
    let mut out = String::from("<ul>\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    out.push_str("</ul>\n");
    out
}

fn hero_section(context: &PageContext) -> String {
    let hero = &context.content.hero;
    let mut out = String::from("<section id=\"top\" class=\"hero\">\n");
    out.push_str(&format!(
        "<h1>{}</h1>\n<p class=\"hero-title\">{}</p>\n<p>{}</p>\n",
        escape(hero.name),
        escape(hero.title),
        escape(hero.summary)
    ));
    out.push_str(&link_list(&hero.cta_links, "cta"));
    out.push_str(&format!("<h2>{}</h2>\n", escape(hero.focus_title)));
    out.push_str(&bullet_list(&hero.focus_points));
    out.push_str("</section>\n");
    out
}

fn skills_section(context: &PageContext) -> String {
    let mut out = String::from("<section id=\"skills\">\n<h2>Skills</h2>\n");
    for group in &context.content.skills {
        out.push_str(&format!(
            "<article class=\"skill-group\">\n<h3>{}</h3>\n",
            escape(group.category)
        ));
        out.push_str(&bullet_list(&group.items));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

fn experience_section(context: &PageContext) -> String {
    let experience = &context.content.experience;
    let mut out = String::from("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for paragraph in &experience.overview {
        out.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    out.push_str("<h3>Focus</h3>\n");
    out.push_str(&bullet_list(&experience.focus));
    out.push_str("<h3>Highlights</h3>\n");
    out.push_str(&bullet_list(&experience.wins));
    out.push_str("</section>\n");
    out
}

fn projects_section(context: &PageContext) -> String {
    let mut out = String::from("<section id=\"projects\">\n<h2>Projects</h2>\n");
    for project in &context.content.projects {
        out.push_str(&format!(
            "<article class=\"project\">\n<h3>{}</h3>\n<p>{}</p>\n</article>\n",
            escape(project.name),
            escape(project.summary)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn github_section(context: &PageContext) -> String {
    if context.github_projects.is_empty() {
        return String::new();
    }

    let mut out = String::from("<section id=\"open-source\">\n<h2>Open Source</h2>\n");
    for repo in &context.github_projects {
        out.push_str("<article class=\"repository\">\n");
        out.push_str(&format!(
            "<h3><a href=\"{}\">{}</a></h3>\n<p>{}</p>\n",
            escape(&repo.url),
            escape(&repo.name),
            escape(&repo.description)
        ));

        let mut meta = Vec::new();
        if let Some(language) = &repo.language {
            meta.push(format!("<span class=\"language\">{}</span>", escape(language)));
        }
        meta.push(format!("<span class=\"stars\">&#9733; {}</span>", repo.stars));
        if let Some(date) = repo.updated_at.get(..10) {
            meta.push(format!(
                "<time datetime=\"{}\">Updated {}</time>",
                escape(&repo.updated_at),
                escape(date)
            ));
        }
        out.push_str(&format!("<p class=\"meta\">{}</p>\n", meta.join(" ")));

        if !repo.topics.is_empty() {
            out.push_str("<ul class=\"topics\">\n");
            for topic in &repo.topics {
                out.push_str(&format!("<li>{}</li>\n", escape(topic)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");
    out
}

fn assessment_section(context: &PageContext) -> String {
    let content = &context.content;
    let mut out = String::from("<section id=\"assessment\">\n<h2>Skill Assessment</h2>\n");
    out.push_str(&format!(
        "<p>{}</p>\n<ul class=\"scores\">\n",
        escape(content.skill_assessment_summary)
    ));
    for score in &content.skill_assessment {
        out.push_str(&format!(
            "<li class=\"score score--{}\"><span>{}</span> <meter min=\"0\" max=\"100\" value=\"{}\">{}</meter></li>\n",
            score.level.as_str(),
            escape(score.name),
            score.score,
            score.score
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

fn videos_section(context: &PageContext) -> String {
    if context.featured_videos.is_empty() {
        return String::new();
    }

    let mut out = String::from("<section id=\"videos\">\n<h2>Latest Videos</h2>\n");
    for video in &context.featured_videos {
        out.push_str(&format!(
            "<article class=\"video\">\n<a href=\"{url}\"><img src=\"{thumb}\" alt=\"{title}\" loading=\"lazy\"></a>\n<h3><a href=\"{url}\">{title}</a></h3>\n</article>\n",
            url = escape(&video.url),
            thumb = escape(&video.thumbnail),
            title = escape(&video.title)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn contact_section(context: &PageContext) -> String {
    let contact = &context.content.contact;
    let mut out = String::from("<section id=\"contact\">\n<h2>Contact</h2>\n");
    out.push_str(&format!(
        "<p>{}</p>\n<p><a href=\"mailto:{email}\">{email}</a></p>\n",
        escape(contact.cta),
        email = escape(contact.email)
    ));
    out.push_str(&link_list(&contact.social_links, "social"));
    out.push_str("</section>\n");
    out
}
