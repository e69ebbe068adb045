//! Style table for list rows.
//!
//! Row styles are looked up by item class and selection state. Unselected rows
//! without an entry use the plain style; selected rows without one use the table's
//! generic selection style.

use crate::core::config::BrowserConfig;
use crate::core::objects::{Item, ItemClass};
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub class: ItemClass,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<StyleKey, Style>,
    selected: Style,
    pub label: Style,
    pub border: Style,
    pub help: Style,
    pub notice: Style,
    pub label_width: u16,
}

impl Theme {
    pub fn from_config(config: &BrowserConfig) -> Self {
        let theme = if config.colors {
            Self::colored()
        } else {
            Self::monochrome()
        };
        Self {
            label_width: config.label_width,
            ..theme
        }
    }

    pub fn colored() -> Self {
        let highlight = Modifier::BOLD | Modifier::DIM;
        let mut theme = Self::base(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(highlight),
        );
        theme.define(
            ItemClass::Container,
            false,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        );
        theme.define(
            ItemClass::Container,
            true,
            Style::default()
                .fg(Color::Blue)
                .bg(Color::Cyan)
                .add_modifier(highlight),
        );
        theme.define(
            ItemClass::BinaryLeaf,
            false,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
        theme.define(
            ItemClass::BinaryLeaf,
            true,
            Style::default()
                .fg(Color::Red)
                .bg(Color::Cyan)
                .add_modifier(highlight),
        );
        theme.define(ItemClass::Other, false, Style::default().fg(Color::DarkGray));
        theme.notice = Style::default().fg(Color::Yellow);
        theme.border = Style::default().fg(Color::DarkGray);
        theme
    }

    pub fn monochrome() -> Self {
        let mut theme = Self::base(Style::default().add_modifier(Modifier::REVERSED));
        theme.define(
            ItemClass::Container,
            false,
            Style::default().add_modifier(Modifier::BOLD),
        );
        theme
    }

    fn base(selected: Style) -> Self {
        Self {
            styles: HashMap::new(),
            selected,
            label: Style::default().add_modifier(Modifier::DIM),
            border: Style::default(),
            help: Style::default().add_modifier(Modifier::DIM),
            notice: Style::default().add_modifier(Modifier::BOLD),
            label_width: BrowserConfig::default().label_width,
        }
    }

    pub fn define(&mut self, class: ItemClass, selected: bool, style: Style) {
        self.styles.insert(StyleKey { class, selected }, style);
    }

    pub fn style_for(&self, item: &Item, selected: bool) -> Style {
        let key = StyleKey {
            class: item.class(),
            selected,
        };
        match self.styles.get(&key) {
            Some(style) => *style,
            None if selected => self.selected,
            None => Style::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
