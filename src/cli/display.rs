// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sokoni CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SOKONI_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! defaults to dark. Respects `NO_COLOR` and non-TTY stdout, so piping the
//! output gives plain text.
//!
//! # Theme detection order
//!
//! 1. `SOKONI_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use sokoni::{Browse, Product, ScoreBreakdown, ScoredProduct};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override
    if let Ok(theme) = std::env::var("SOKONI_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Truncate plain text to `max` characters, ending in … when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score value
pub fn score_value(score: u32) -> String {
    let text = format!("{:>5}", score);
    if score >= 100 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 40 {
        themed(GREEN, &[], &text)
    } else if score > 0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Price, with the strike-through original and discount badge when on sale
pub fn price_label(product: &Product) -> String {
    let mut label = themed(GREEN, &[BOLD], &product.display_price());
    if let Some(original) = product.display_original_price() {
        label.push(' ');
        label.push_str(&themed(GRAY, &[], &original));
    }
    if let Some(discount) = product.display_discount() {
        label.push(' ');
        label.push_str(&themed(RED, &[BOLD], &discount));
    }
    if product.is_new {
        label.push(' ');
        label.push_str(&themed(MAGENTA, &[BOLD], "NEW"));
    }
    label
}

/// Star rating with review count: ★★★★☆ (78)
pub fn rating_label(product: &Product) -> String {
    let filled = usize::from(product.rating.min(5));
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
    format!("{} ({})", themed(YELLOW, &[], &stars), product.reviews)
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

fn product_rows(item: &ScoredProduct, show_score: bool) {
    let product = &item.product;
    let name = truncate(&product.name, 56);
    let head = if show_score {
        format!(" {} {}", score_value(item.score), themed(BLUE, &[BOLD], &name))
    } else {
        format!(" {}", themed(BLUE, &[BOLD], &name))
    };
    row(&head);

    let indent = if show_score { "       " } else { " " };
    let brand = product.brand.as_deref().unwrap_or("-");
    let meta = format!(
        "{}{} {} {}  {}",
        indent,
        pad_right(&price_label(product), 36),
        themed(GRAY, &[], &format!("{} · {}", brand, product.category)),
        themed(GRAY, &[], &format!("#{}", product.id)),
        rating_label(product),
    );
    row(&meta);
}

/// Print the visible part of a browse result.
pub fn print_browse(browse: &Browse, visible: usize) {
    let page = browse.page(visible);
    section_top(&browse.heading());

    if page.items.is_empty() {
        let message = if browse.is_search() {
            "No products found. Try adjusting your search terms or browse our categories."
        } else {
            "No products found in this category."
        };
        row(&format!(" {}", themed(GRAY, &[], message)));
        section_bot();
        return;
    }

    let summary = if browse.is_search() {
        format!("Found {} products matching your search", page.total)
    } else {
        page.summary()
    };
    row(&format!(" {}", themed(GRAY, &[], &summary)));
    row("");

    for item in page.items {
        product_rows(item, browse.is_search());
    }

    if page.has_more {
        row("");
        row(&format!(
            " {}",
            themed(
                CYAN,
                &[],
                &format!("… {} more (raise --limit)", page.total - page.items.len())
            )
        ));
    }
    section_bot();
}

/// Print one product's score, rule by rule.
pub fn print_breakdown(query: &str, product: &Product, breakdown: &ScoreBreakdown) {
    section_top(&format!("\"{}\" → {}", query, truncate(&product.name, 48)));

    let lines: [(&str, u32); 8] = [
        ("name contains query", breakdown.name),
        ("brand contains query", breakdown.brand),
        ("description contains query", breakdown.description),
        ("category contains query", breakdown.category),
        ("partial word matches", breakdown.partial),
        ("fuzzy word matches", breakdown.fuzzy),
        ("related by category", breakdown.related_category),
        ("related by brand", breakdown.related_brand),
    ];
    for (label, points) in lines {
        row(&format!(" {} {}", pad_right(label, 30), score_value(points)));
    }
    row(&format!(" {}", themed(GRAY, &[], &"─".repeat(36))));
    row(&format!(
        " {} {}",
        pad_right(&themed(CYAN, &[BOLD], "total"), 30),
        score_value(breakdown.total())
    ));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
