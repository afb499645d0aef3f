use crate::palette::Color;
use crate::ui::{term_theme, Icons};
use owo_colors::OwoColorize;

pub fn header(icon: &str, text: &str) {
    println!("{} {}", icon, text.style(term_theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(term_theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(term_theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(term_theme().info.clone()),
        label.style(term_theme().label.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(term_theme().header.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(term_theme().label.clone()), value);
}

pub fn muted(text: &str) -> String {
    text.style(term_theme().muted.clone()).to_string()
}

/// A small block filled with `color`, followed by its hex code
pub fn swatch(color: Color) -> String {
    if term_theme().truecolor {
        format!("{} {}", "   ".on_truecolor(color.r, color.g, color.b), color)
    } else {
        color.to_string()
    }
}
