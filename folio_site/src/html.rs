// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembles rendered charts into one standalone HTML page.

use std::fmt::Write as _;

use crate::svg::escape_xml;

/// One chart card on the page.
#[derive(Clone, Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    /// Inline SVG markup; inserted verbatim.
    pub(crate) svg: String,
}

const STYLE: &str = "body{margin:0;padding:32px;background:#020617;color:#e5e7eb;\
font-family:system-ui,sans-serif}\
h1{font-size:22px;margin:0 0 24px}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(360px,1fr));gap:20px}\
section{background:#0f172a;border:1px solid #1f2937;border-radius:12px;padding:16px}\
h2{font-size:15px;margin:0 0 6px}\
p{font-size:12px;color:#9ca3af;margin:0 0 12px}\
svg{max-width:100%;height:auto}";

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    out.push_str("<div class=\"grid\">\n");
    for section in sections {
        out.push_str("<section>\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape_xml(section.title));
        if !section.description.is_empty() {
            let _ = writeln!(out, "<p>{}</p>", escape_xml(&section.description));
        }
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
