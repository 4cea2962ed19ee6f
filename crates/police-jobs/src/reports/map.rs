use super::html::{escape_html, slugify};
use crate::counties::{county_named, CountyGroups};
use crate::postings::fields::preview;
use crate::postings::JobRecord;
use std::fmt::{self, Write as _};

const POPUP_JOB_LIMIT: usize = 5;
const POPUP_DETAILS_CHARS: usize = 100;
const PANEL_DETAILS_CHARS: usize = 80;

const CANVAS_WIDTH: f64 = 580.0;
const CANVAS_HEIGHT: f64 = 900.0;
const CANVAS_PADDING: f64 = 30.0;
const MIN_LATITUDE: f64 = 37.75;
const MAX_LATITUDE: f64 = 41.80;
const MIN_LONGITUDE: f64 = -88.12;
const MAX_LONGITUDE: f64 = -84.76;

/// Rough state boundary, clockwise from the north-west corner.
const INDIANA_OUTLINE: &[(f64, f64)] = &[
    (41.76, -87.52),
    (41.76, -84.81),
    (39.10, -84.82),
    (38.78, -84.81),
    (38.69, -85.17),
    (38.28, -85.45),
    (38.27, -85.76),
    (38.00, -86.00),
    (37.96, -86.52),
    (37.84, -86.65),
    (37.99, -87.13),
    (37.97, -87.57),
    (37.78, -88.03),
    (38.23, -87.98),
    (38.90, -87.53),
    (39.35, -87.53),
];

/// Marker colour class by job count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerBucket {
    Empty,
    One,
    Two,
    Three,
    FourPlus,
}

impl MarkerBucket {
    pub const fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            _ => Self::FourPlus,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Empty => "#f0f0f0",
            Self::One => "#ffeb3b",
            Self::Two => "#ff9800",
            Self::Three => "#ff5722",
            Self::FourPlus => "#f44336",
        }
    }

    pub const fn legend_label(self) -> &'static str {
        match self {
            Self::Empty => "0 jobs",
            Self::One => "1 job",
            Self::Two => "2 jobs",
            Self::Three => "3 jobs",
            Self::FourPlus => "4+ jobs",
        }
    }
}

pub fn marker_radius(count: usize) -> usize {
    10 + count * 2
}

fn project(latitude: f64, longitude: f64) -> (f64, f64) {
    let usable_width = CANVAS_WIDTH - 2.0 * CANVAS_PADDING;
    let usable_height = CANVAS_HEIGHT - 2.0 * CANVAS_PADDING;
    let x = CANVAS_PADDING
        + (longitude - MIN_LONGITUDE) / (MAX_LONGITUDE - MIN_LONGITUDE) * usable_width;
    let y = CANVAS_PADDING
        + (MAX_LATITUDE - latitude) / (MAX_LATITUDE - MIN_LATITUDE) * usable_height;
    (x, y)
}

/// Self-contained map page: SVG markers with popups, a legend, and a
/// searchable side panel. Counties without coordinates get no marker.
pub fn render_map(groups: &CountyGroups) -> Result<String, fmt::Error> {
    let mut html = String::new();
    let total = groups.total_jobs();

    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Indiana Police Jobs Map</title>
<style>
{MAP_STYLE}
</style>
</head>
<body>
<div class="map-container">
"#
    )?;

    write_canvas(&mut html, groups)?;
    html.push_str("</div>\n");

    write_popups(&mut html, groups)?;
    write_legend(&mut html)?;
    write_side_panel(&mut html, groups, total)?;

    write!(
        html,
        r#"<script>
{MAP_SCRIPT}
</script>
</body>
</html>
"#
    )?;

    Ok(html)
}

fn write_canvas(html: &mut String, groups: &CountyGroups) -> fmt::Result {
    writeln!(
        html,
        r#"<svg class="map" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}" role="img" aria-label="Indiana job opportunities by county">"#
    )?;
    writeln!(
        html,
        r##"<rect x="0" y="0" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" fill="#e8f1f8"/>"##
    )?;

    let outline = INDIANA_OUTLINE
        .iter()
        .map(|(latitude, longitude)| {
            let (x, y) = project(*latitude, *longitude);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        html,
        r##"<polygon class="state" points="{outline}" fill="#fdfdf8" stroke="#8a8a8a" stroke-width="2"/>"##
    )?;

    for (county, records) in groups.iter() {
        let Some(location) = county_named(county) else {
            continue;
        };

        let count = records.len();
        let (x, y) = project(location.latitude, location.longitude);
        let bucket = MarkerBucket::for_count(count);
        let name = escape_html(county);
        writeln!(
            html,
            r#"<g class="marker" data-county="{name}" onclick="showPopup('popup-{slug}')"><circle cx="{x:.1}" cy="{y:.1}" r="{radius}" fill="{fill}" fill-opacity="0.7" stroke="black" stroke-width="2"><title>{name} County: {count} job(s)</title></circle><text x="{x:.1}" y="{label_y:.1}" text-anchor="middle">{name}</text></g>"#,
            slug = slugify(county),
            radius = marker_radius(count),
            fill = bucket.color(),
            label_y = y + marker_radius(count) as f64 + 12.0,
        )?;
    }

    html.push_str("</svg>\n");
    Ok(())
}

fn write_popups(html: &mut String, groups: &CountyGroups) -> fmt::Result {
    html.push_str(
        r#"<div id="popupOverlay" class="popup-overlay" onclick="closePopup(event)">
<div class="popup-frame">
<button class="popup-close" onclick="closePopup()">&times;</button>
<div id="popupBody"></div>
</div>
</div>
"#,
    );

    for (county, records) in groups.iter() {
        if county_named(county).is_none() {
            continue;
        }
        writeln!(
            html,
            r#"<template id="popup-{}">"#,
            slugify(county)
        )?;
        write_popup(html, county, records)?;
        html.push_str("</template>\n");
    }

    Ok(())
}

fn write_popup(html: &mut String, county: &str, records: &[JobRecord]) -> fmt::Result {
    writeln!(
        html,
        r#"<div class="popup"><h3>{} County</h3><p><strong>Job Opportunities: {}</strong></p><hr>"#,
        escape_html(county),
        records.len()
    )?;

    for job in records.iter().take(POPUP_JOB_LIMIT) {
        let closing = job
            .closing_date
            .as_deref()
            .map(|date| {
                format!(
                    r#"<br><small class="closing">Closing: {}</small>"#,
                    escape_html(date)
                )
            })
            .unwrap_or_default();

        writeln!(
            html,
            r#"<div class="popup-job"><strong>{department}</strong><br><em>{location}</em><br>{details}...<br><small>Posted: {posted}</small>{closing}<br><a href="{link}" target="_blank">View Full Posting &rarr;</a></div>"#,
            department = escape_html(&job.department),
            location = escape_html(&job.location),
            details = escape_html(preview(&job.details, POPUP_DETAILS_CHARS)),
            posted = escape_html(&job.date_posted),
            link = escape_html(&job.ilea_link),
        )?;
    }

    if records.len() > POPUP_JOB_LIMIT {
        writeln!(
            html,
            "<p><em>... and {} more opportunities</em></p>",
            records.len() - POPUP_JOB_LIMIT
        )?;
    }

    html.push_str("</div>\n");
    Ok(())
}

fn write_legend(html: &mut String) -> fmt::Result {
    html.push_str("<div class=\"legend\">\n<p><strong>Job Opportunities</strong></p>\n");
    for bucket in [
        MarkerBucket::One,
        MarkerBucket::Two,
        MarkerBucket::Three,
        MarkerBucket::FourPlus,
    ] {
        writeln!(
            html,
            r#"<p><span style="color:{};">&#9679;</span> {}</p>"#,
            bucket.color(),
            bucket.legend_label()
        )?;
    }
    html.push_str("</div>\n");
    Ok(())
}

fn write_side_panel(html: &mut String, groups: &CountyGroups, total: usize) -> fmt::Result {
    let mut jobs: Vec<(&str, &JobRecord)> = groups
        .iter()
        .flat_map(|(county, records)| records.iter().map(move |record| (county, record)))
        .collect();
    jobs.sort_by(|a, b| (a.0, &a.1.department).cmp(&(b.0, &b.1.department)));

    write!(
        html,
        r#"<button class="toggle-btn" onclick="toggleSidePanel()">&#128203; Jobs ({total})</button>
<div class="side-panel" id="sidePanel">
<div class="panel-header">
<h3>Indiana Police Jobs ({total} total)</h3>
<button class="close-btn" onclick="toggleSidePanel()">&times;</button>
</div>
<div class="panel-search">
<input type="text" id="jobSearch" placeholder="Search jobs..." onkeyup="filterJobs()">
</div>
<div id="jobList">
"#
    )?;

    let mut current_county: Option<&str> = None;
    for (county, job) in jobs {
        if current_county != Some(county) {
            if current_county.is_some() {
                html.push_str("</div>\n");
            }
            current_county = Some(county);
            writeln!(
                html,
                r#"<div class="county-section" data-county="{name}"><div class="county-title">{name} County</div>"#,
                name = escape_html(county)
            )?;
        }

        let closing = job
            .closing_date
            .as_deref()
            .map(|date| format!(r#"<span class="closing">Closes: {}</span>"#, escape_html(date)))
            .unwrap_or_default();

        writeln!(
            html,
            r#"<div class="job-item" data-department="{department_key}" data-county="{county_key}"><div class="job-card"><div class="job-department">{department}</div><div class="job-location">{location}</div><div class="job-details">{details}...</div>{closing}<div class="job-link"><a href="{link}" target="_blank">View Full Posting &rarr;</a></div></div></div>"#,
            department_key = escape_html(&job.department.to_lowercase()),
            county_key = escape_html(&county.to_lowercase()),
            department = escape_html(&job.department),
            location = escape_html(&job.location),
            details = escape_html(preview(&job.details, PANEL_DETAILS_CHARS)),
            link = escape_html(&job.ilea_link),
        )?;
    }

    if current_county.is_some() {
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</div>\n");
    Ok(())
}

const MAP_STYLE: &str = r#"body { margin: 0; font-family: Arial, sans-serif; }
.map-container { height: 100vh; margin-right: 350px; display: flex; justify-content: center; }
.map { height: 100%; max-width: 100%; }
.marker { cursor: pointer; }
.marker text { font-size: 11px; fill: #333; pointer-events: none; }
.popup-overlay { display: none; position: fixed; inset: 0; background: rgba(0,0,0,0.25); z-index: 10001; }
.popup-overlay.open { display: flex; align-items: center; justify-content: center; }
.popup-frame { position: relative; background: white; border-radius: 5px; padding: 12px; width: 350px; max-width: 90vw; max-height: 80vh; overflow-y: auto; box-shadow: 0 4px 8px rgba(0,0,0,0.2); }
.popup-close { position: absolute; top: 4px; right: 8px; border: none; background: none; font-size: 20px; cursor: pointer; }
.popup-job { margin-bottom: 10px; padding: 8px; border-left: 3px solid #007bff; background-color: #f8f9fa; }
.popup-job a, .job-link a { color: #007bff; }
.closing { color: red; font-size: 10px; }
.legend { position: fixed; bottom: 50px; left: 50px; width: 200px; background-color: white; border: 2px solid grey; z-index: 9999; font-size: 14px; padding: 10px; border-radius: 5px; box-shadow: 0 2px 5px rgba(0,0,0,0.2); }
.legend p { margin: 4px 0; }
.side-panel { position: fixed; top: 10px; right: 10px; width: 350px; height: 90vh; background-color: white; border: 2px solid #007bff; z-index: 9999; font-size: 12px; padding: 10px; overflow-y: auto; box-shadow: 0 4px 8px rgba(0,0,0,0.1); box-sizing: border-box; }
.panel-header { background-color: #007bff; color: white; padding: 8px; margin: -10px -10px 10px -10px; display: flex; justify-content: space-between; align-items: center; }
.panel-header h3 { margin: 0; font-size: 16px; }
.close-btn { background: none; border: none; color: white; font-size: 20px; cursor: pointer; display: none; }
.panel-search input { width: 100%; padding: 5px; border: 1px solid #ddd; border-radius: 3px; box-sizing: border-box; margin-bottom: 10px; }
.county-title { background-color: #f8f9fa; padding: 5px; margin: 5px 0; border-left: 3px solid #007bff; font-weight: bold; font-size: 11px; }
.job-card { border: 1px solid #ddd; margin: 3px 0; padding: 8px; border-radius: 3px; background-color: #fafafa; }
.job-department { font-weight: bold; font-size: 11px; color: #333; margin-bottom: 3px; }
.job-location { font-size: 10px; color: #666; margin-bottom: 3px; }
.job-details { font-size: 10px; color: #555; margin-bottom: 3px; line-height: 1.3; }
.job-link { margin-top: 5px; font-size: 10px; font-weight: bold; }
.toggle-btn { position: fixed; top: 10px; right: 10px; z-index: 10000; background: #007bff; color: white; border: none; padding: 10px 15px; border-radius: 5px; font-size: 14px; font-weight: bold; cursor: pointer; box-shadow: 0 2px 5px rgba(0,0,0,0.2); display: none; }
@media (max-width: 768px) {
  .side-panel { width: 100%; height: 100vh; top: 0; right: 0; transform: translateX(100%); transition: transform 0.3s ease; }
  .side-panel.open { transform: translateX(0); }
  .toggle-btn { display: block; }
  .map-container { margin-right: 0; }
  .legend { bottom: 10px; left: 10px; width: 150px; font-size: 12px; padding: 8px; }
}"#;

const MAP_SCRIPT: &str = r#"function filterJobs() {
  var filter = document.getElementById('jobSearch').value.toLowerCase();
  var jobItems = document.getElementsByClassName('job-item');
  for (var i = 0; i < jobItems.length; i++) {
    var department = jobItems[i].getAttribute('data-department');
    var county = jobItems[i].getAttribute('data-county');
    var visible = department.indexOf(filter) !== -1 || county.indexOf(filter) !== -1;
    jobItems[i].style.display = visible ? 'block' : 'none';
  }
}

function toggleSidePanel() {
  var panel = document.getElementById('sidePanel');
  var toggleBtn = document.querySelector('.toggle-btn');
  var closeBtn = document.querySelector('.close-btn');
  var opening = !panel.classList.contains('open');
  panel.classList.toggle('open', opening);
  if (toggleBtn) toggleBtn.style.display = opening ? 'none' : 'block';
  if (closeBtn) closeBtn.style.display = opening ? 'block' : 'none';
}

function updateMobileUI() {
  var closeBtn = document.querySelector('.close-btn');
  if (closeBtn) closeBtn.style.display = window.innerWidth <= 768 ? 'block' : 'none';
}

function showPopup(id) {
  var template = document.getElementById(id);
  if (!template) return;
  document.getElementById('popupBody').innerHTML = template.innerHTML;
  document.getElementById('popupOverlay').classList.add('open');
}

function closePopup(event) {
  if (event && event.target !== event.currentTarget) return;
  document.getElementById('popupOverlay').classList.remove('open');
}

window.addEventListener('resize', updateMobileUI);
updateMobileUI();"#;
