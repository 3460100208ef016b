use crate::api::UserProfile;
use crate::tea::message::ScrollAction;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};
use std::ops::Range;

/// Selection and scroll window of the user list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListState {
    selected: usize,
    offset: usize,
    /// Rows that fit in the viewport at the last render
    page_rows: usize,
}

impl UserListState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the selection; `total` is the number of users in the list
    pub fn scroll(&mut self, action: ScrollAction, total: usize) {
        if total == 0 {
            *self = Self {
                page_rows: self.page_rows,
                ..Self::default()
            };
            return;
        }

        let last = total - 1;
        let page = self.page_rows.max(1);

        self.selected = match action {
            ScrollAction::Up => self.selected.saturating_sub(1),
            ScrollAction::Down => (self.selected + 1).min(last),
            ScrollAction::PageUp => self.selected.saturating_sub(page),
            ScrollAction::PageDown => (self.selected + page).min(last),
            ScrollAction::Top => 0,
            ScrollAction::Bottom => last,
        };
    }

    /// Keep the selection inside a list of `total` users
    pub fn clamp(&mut self, total: usize) {
        self.selected = self.selected.min(total.saturating_sub(1));
        self.offset = self.offset.min(self.selected);
    }

    /// Window of rows to materialize for a viewport holding `capacity` rows.
    ///
    /// Moves the window just enough to keep the selection visible.
    pub fn visible_range(&mut self, total: usize, capacity: usize) -> Range<usize> {
        self.page_rows = capacity;
        if total == 0 || capacity == 0 {
            return 0..0;
        }

        self.selected = self.selected.min(total - 1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + capacity {
            self.offset = self.selected + 1 - capacity;
        }
        self.offset = self.offset.min(total.saturating_sub(capacity));

        self.offset..(self.offset + capacity).min(total)
    }
}

/// Virtualized list of users with a fixed row height.
///
/// Only the rows inside the viewport are turned into text.
pub struct UserList<'a> {
    users: &'a [UserProfile],
    row_height: u16,
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> UserList<'a> {
    pub fn new(users: &'a [UserProfile], theme: &'a Theme) -> Self {
        Self {
            users,
            row_height: 3,
            theme,
            block: None,
        }
    }

    /// Terminal lines per user row (at least 1)
    pub fn row_height(mut self, row_height: u16) -> Self {
        self.row_height = row_height.max(1);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Lines for one row. Every field is shown at any row height; shorter
    /// rows pack more fields onto each line.
    fn row_lines(&self, user: &UserProfile) -> Vec<Line<'static>> {
        let colors = &self.theme.colors.user_list;
        let name = Span::styled(
            user.full_name(),
            Style::default().fg(colors.name).add_modifier(Modifier::BOLD),
        );
        let meta = Span::styled(
            format!("Age: {}  {}", user.age, user.location()),
            Style::default().fg(colors.meta),
        );
        let avatar = Span::styled(user.avatar_url.clone(), Style::default().fg(colors.avatar));

        match self.row_height {
            1 => vec![Line::from(vec![name, Span::raw("  "), meta, Span::raw("  "), avatar])],
            2 => vec![
                Line::from(vec![name, Span::raw("  "), meta]),
                Line::from(avatar),
            ],
            _ => vec![Line::from(name), Line::from(meta), Line::from(avatar)],
        }
    }
}

impl StatefulWidget for UserList<'_> {
    type State = UserListState;

    fn render(mut self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        let capacity = area.height / self.row_height;
        let range = state.visible_range(self.users.len(), usize::from(capacity));

        for (slot, index) in (0..capacity).zip(range) {
            let Some(user) = self.users.get(index) else {
                break;
            };

            let row_area = Rect::new(area.x, area.y + slot * self.row_height, area.width, self.row_height);
            let style = if index == state.selected() {
                self.theme.selection_style()
            } else {
                Style::default()
            };

            Paragraph::new(self.row_lines(user)).style(style).render(row_area, buf);
        }
    }
}
