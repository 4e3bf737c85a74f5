//! Song listing page

use std::fmt::Write;

use super::escape_html;

const STYLESHEETS: &[&str] = &[
    "styles/style.css",
    "https://fonts.googleapis.com/css?family=Roboto&display=swap",
    "https://unpkg.com/purecss@1.0.1/build/pure-min.css",
];

/// Localized column headings
#[derive(Debug, Clone, Default)]
pub struct ColumnLabels {
    pub title: String,
    pub album: String,
    pub year: String,
    pub artist: String,
    pub genre: String,
    pub play: String,
}

/// One table row
#[derive(Debug, Clone)]
pub struct SongRow {
    pub title: String,
    pub album: String,
    pub year: i32,
    pub artist: String,
    pub genre: String,
    pub audio_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct SongListPage {
    pub lang: String,
    /// Document title
    pub header: String,
    /// Heading label, followed by the artist filter when there is one
    pub list_label: String,
    pub artist: Option<String>,
    pub labels: ColumnLabels,
    pub rows: Vec<SongRow>,
    pub visit_date_line: String,
    pub visit_count_line: String,
}

impl SongListPage {
    fn heading(&self) -> String {
        match self.artist.as_deref().filter(|a| !a.trim().is_empty()) {
            Some(artist) => format!("{} {}", self.list_label, artist),
            None => self.list_label.clone(),
        }
    }
}

/// Render the full HTML document. Every interpolated value is escaped.
pub fn render_song_list(page: &SongListPage) -> String {
    let mut html = String::with_capacity(1024 + page.rows.len() * 256);

    // Writing into a String cannot fail
    let _ = write_document(&mut html, page);
    html
}

fn write_document(html: &mut String, page: &SongListPage) -> std::fmt::Result {
    write!(html, "<!DOCTYPE html><html lang=\"{}\">", escape_html(&page.lang))?;
    html.push_str("<head><meta charset=\"utf-8\">");
    for href in STYLESHEETS {
        write!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href))?;
    }
    write!(html, "<title>{}</title>", escape_html(&page.header))?;
    html.push_str("</head><body>");

    write!(html, "<h1>{}</h1>", escape_html(&page.heading()))?;

    html.push_str("<table class=\"pure-table\"><thead><tr>");
    let labels = &page.labels;
    for label in [
        &labels.title,
        &labels.album,
        &labels.year,
        &labels.artist,
        &labels.genre,
        &labels.play,
    ] {
        write!(html, "<th><b>{}</b></th>", escape_html(label))?;
    }
    html.push_str("</tr></thead><tbody>");

    for row in &page.rows {
        write_row(html, row)?;
    }
    html.push_str("</tbody></table>");

    write!(html, "<h3>{}</h3>", escape_html(&page.visit_date_line))?;
    write!(html, "<h3>{}</h3>", escape_html(&page.visit_count_line))?;
    html.push_str("</body></html>");
    Ok(())
}

fn write_row(html: &mut String, row: &SongRow) -> std::fmt::Result {
    html.push_str("<tr>");
    write!(html, "<td>{}</td>", escape_html(&row.title))?;
    write!(html, "<td>{}</td>", escape_html(&row.album))?;
    write!(html, "<td>{}</td>", row.year)?;
    write!(html, "<td>{}</td>", escape_html(&row.artist))?;
    write!(html, "<td>{}</td>", escape_html(&row.genre))?;
    write!(
        html,
        "<td><audio controls preload=\"none\"><source src=\"{}\" type=\"audio/mpeg\"></audio></td>",
        escape_html(&row.audio_url)
    )?;
    html.push_str("</tr>");
    Ok(())
}
