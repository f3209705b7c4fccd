//! HTML fixtures shaped like the pages the crawler meets in the wild.

/// A coolors-style palette listing: data-hex attributes on the swatches.
pub fn coolors_page() -> String {
    page(r#"
        <div class="palette_container">
          <div class="palette_color" data-hex="264653"></div>
          <div class="palette_color" data-hex="2a9d8f"></div>
          <div class="palette_color" data-hex="e9c46a"></div>
          <div class="palette_color" data-hex="f4a261"></div>
        </div>
        <div class="palette_container">
          <div class="palette_color" data-hex="003049"></div>
          <div class="palette_color" data-hex="d62828"></div>
          <div class="palette_color" data-hex="f77f00"></div>
        </div>
    "#)
}

/// A colorhunt-style listing: background-color styles on the swatches.
pub fn colorhunt_page() -> String {
    page(r#"
        <div class="palette">
          <div class="color" style="background-color: #222831;"></div>
          <div class="color" style="background-color: #393e46;"></div>
          <div class="color" style="background-color: #00adb5;"></div>
          <div class="color" style="background-color: #eeeeee;"></div>
        </div>
    "#)
}

/// A colorhexa-style reference table: ten rows, hex in the second cell.
pub fn colorhexa_page() -> String {
    let rows: String = (0..10)
        .map(|i| format!("<tr><td>shade {i}</td><td>1a2b3{i}</td></tr>"))
        .collect();
    page(&format!(
        r#"<table class="color-table"><tbody>{rows}</tbody></table>"#
    ))
}

/// A schemecolor-style page: hex codes as text in nested .hexcode spans.
pub fn schemecolor_page() -> String {
    page(r#"
        <div class="palette-container">
          <div class="palette-color"><span class="hexcode">0A1128</span></div>
          <div class="palette-color"><span class="hexcode">001F54</span></div>
          <div class="palette-color"><span class="hexcode">034078</span></div>
        </div>
    "#)
}

/// A blog-like page the generic heuristic should handle.
pub fn generic_blog_page() -> String {
    page(r#"
        <article>
          <h1>Our favorite ocean scheme</h1>
          <div class="ocean-color-scheme">
            <span class="swatch" style="background-color: #05445e;"></span>
            <span class="swatch" style="background-color: #189ab4;"></span>
            <span class="swatch" style="background-color: #75e6da;"></span>
            <span class="swatch" style="background-color: #d4f1f4;"></span>
          </div>
        </article>
    "#)
}

/// A page with many distinct generic palettes, for testing the result cap.
pub fn many_palettes_page(count: usize) -> String {
    let containers: String = (0..count)
        .map(|i| {
            format!(
                r#"<div class="palette">
                     <span class="swatch" style="background-color: #{i:02x}0000;"></span>
                     <span class="swatch" style="background-color: #00{i:02x}00;"></span>
                     <span class="swatch" style="background-color: #0000{i:02x};"></span>
                   </div>"#
            )
        })
        .collect();
    page(&containers)
}

/// A page with nothing palette-like on it.
pub fn no_palette_page() -> String {
    page("<article><p>All about oceans. Nothing colorful here.</p></article>")
}

/// A search-result page in the shape the search provider parses.
pub fn search_results_page(links: &[&str]) -> String {
    let blocks: String = links
        .iter()
        .map(|href| format!(r#"<div class="tF2Cxc"><a href="{href}"><h3>hit</h3></a></div>"#))
        .collect();
    page(&blocks)
}

fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>fixture</title></head><body>{body}</body></html>")
}
