//! Render-agnostic cell and row-action descriptions, plus the formatting
//! helpers they rely on.

#[cfg(test)]
#[path = "cells_test.rs"]
mod cells_test;

/// What a single table cell should display.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    /// Emphasized text (the original renders these with a medium weight).
    Emphasis(String),
    /// De-emphasized text, e.g. timestamps.
    Muted(String),
    /// A monetary amount, formatted as pt-BR BRL at render time.
    Currency(f64),
    Badge {
        label: String,
        variant: BadgeVariant,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge badge--default",
            Self::Secondary => "badge badge--secondary",
            Self::Destructive => "badge badge--destructive",
        }
    }
}

/// One entry in a row's action menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowAction {
    pub label: &'static str,
    pub intent: ActionIntent,
    pub destructive: bool,
}

/// What a row action asks the hosting page to do. Carries the row's id so
/// the handler needs no access to the original entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionIntent {
    CopyId(String),
    Edit(String),
    Delete(String),
}

/// Format a value as Brazilian real: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-R$ {grouped},{frac:02}")
    } else {
        format!("R$ {grouped},{frac:02}")
    }
}

/// Initials for an avatar fallback: first letter of the first and last
/// words of the name, uppercased. `?` when the name is empty.
pub fn initials(name: &str) -> String {
    let letters: Vec<char> = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    match (letters.first(), letters.last()) {
        (Some(first), Some(last)) if letters.len() > 1 => {
            format!("{}{}", first.to_uppercase(), last.to_uppercase())
        }
        (Some(first), _) => first.to_uppercase().to_string(),
        _ => "?".to_owned(),
    }
}
