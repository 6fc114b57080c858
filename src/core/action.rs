//! # Actions
//!
//! Everything that can happen in the filmstrip becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! The collection arrives? That's `Action::TemplatesLoaded(templates)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the adapter what I/O
//! to perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The adapter applies actions one at a time from a single loop, so a load
//! completing and a key press are ordered by arrival.

use log::{debug, error, info, warn};

use crate::catalog::TemplateCollection;
use crate::core::state::{App, LoadState, PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view became active. Issues the one-shot load.
    Mount,
    TemplatesLoaded(TemplateCollection),
    LoadFailed(String),
    /// Position within the visible window (0..PAGE_SIZE).
    SelectThumbnail(usize),
    Next,
    Previous,
    Quit,
}

/// Side effect requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnLoad,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.load_state != LoadState::Idle {
                debug!("Mount ignored: load already {:?}", app.load_state);
                return Effect::None;
            }
            app.load_state = LoadState::Pending;
            info!("Mounted, loading templates via {}", app.provider.name());
            Effect::SpawnLoad
        }
        Action::TemplatesLoaded(templates) => {
            if app.load_state == LoadState::Loaded {
                warn!("Ignoring second template collection ({} records)", templates.len());
                return Effect::None;
            }
            info!("Templates loaded: {}", templates.len());
            app.templates = templates;
            app.load_state = LoadState::Loaded;
            Effect::None
        }
        Action::LoadFailed(reason) => {
            error!("Failed to load templates: {}", reason);
            if app.load_state != LoadState::Loaded {
                app.load_state = LoadState::Failed;
            }
            Effect::None
        }
        Action::SelectThumbnail(position) => {
            if position >= PAGE_SIZE {
                debug!("Ignoring selection of slot {} outside the window", position);
                return Effect::None;
            }
            let index = app.window_offset + position;
            if index < app.templates.len() {
                debug!("Selected template {} ({})", index, app.templates[index].id);
                app.selected = Some(index);
            } else {
                debug!("Ignoring selection of empty slot {}", position);
            }
            Effect::None
        }
        Action::Next => {
            if app.can_go_next() {
                app.window_offset += PAGE_SIZE;
            }
            Effect::None
        }
        Action::Previous => {
            if app.can_go_previous() {
                app.window_offset = app.window_offset.saturating_sub(PAGE_SIZE);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_templates, test_app, test_app_with};

    fn ids(app: &App) -> Vec<&str> {
        app.visible_window().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_mount_spawns_load_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Mount), Effect::SpawnLoad);
        assert_eq!(app.load_state, LoadState::Pending);
        assert_eq!(update(&mut app, Action::Mount), Effect::None);
    }

    #[test]
    fn test_load_replaces_templates_and_keeps_cursor() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(&mut app, Action::TemplatesLoaded(sample_templates(10)));
        assert_eq!(app.load_state, LoadState::Loaded);
        assert_eq!(app.templates.len(), 10);
        assert_eq!(app.window_offset, 0);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_second_collection_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(&mut app, Action::TemplatesLoaded(sample_templates(10)));
        update(&mut app, Action::TemplatesLoaded(sample_templates(2)));
        assert_eq!(app.templates.len(), 10);
    }

    #[test]
    fn test_load_failure_is_contained() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        let effect = update(&mut app, Action::LoadFailed("load error: gone".into()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.load_state, LoadState::Failed);
        assert!(app.templates.is_empty());
        assert!(!app.can_go_next());
        assert!(!app.can_go_previous());
        assert!(app.detail().is_none());
    }

    #[test]
    fn test_actions_before_load_are_noops() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(&mut app, Action::Next);
        update(&mut app, Action::Previous);
        update(&mut app, Action::SelectThumbnail(0));
        assert_eq!(app.window_offset, 0);
        assert!(app.selected.is_none());

        update(&mut app, Action::TemplatesLoaded(sample_templates(10)));
        assert_eq!(ids(&app), vec!["t0", "t1", "t2", "t3"]);
    }

    #[test]
    fn test_window_bounds_hold_for_every_reachable_offset() {
        for n in 0..=13 {
            let mut app = test_app_with(sample_templates(n));
            let upper = n.saturating_sub(PAGE_SIZE);
            for step in 0..10 {
                let action = if step < 5 { Action::Next } else { Action::Previous };
                update(&mut app, action);
                assert!(app.window_offset <= upper, "n={n} offset={}", app.window_offset);
                assert_eq!(app.window_offset % PAGE_SIZE, 0);
                assert!(app.visible_window().len() <= PAGE_SIZE);
                assert!(app.window_offset + app.visible_window().len() <= n);
            }
        }
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut app = test_app_with(sample_templates(10));
        update(&mut app, Action::Previous);
        assert_eq!(app.window_offset, 0);
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut app = test_app_with(sample_templates(10));
        app.window_offset = 8;
        update(&mut app, Action::Next);
        assert_eq!(app.window_offset, 8);
    }

    #[test]
    fn test_pagination_round_trip() {
        let mut app = test_app_with(sample_templates(10));
        for _ in 0..3 {
            update(&mut app, Action::Next);
        }
        assert_eq!(app.window_offset, 8);
        for _ in 0..3 {
            update(&mut app, Action::Previous);
        }
        assert_eq!(app.window_offset, 0);
    }

    #[test]
    fn test_selection_marks_exactly_one_visible_thumbnail() {
        let mut app = test_app_with(sample_templates(10));
        update(&mut app, Action::Next);
        update(&mut app, Action::SelectThumbnail(2));

        let active: Vec<_> = app
            .visible_window()
            .iter()
            .filter(|t| app.is_active(t))
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(active, vec![app.templates[app.window_offset + 2].id.clone()]);
        assert_eq!(active, vec!["t6".to_string()]);
    }

    #[test]
    fn test_select_empty_slot_is_noop() {
        let mut app = test_app_with(sample_templates(10));
        app.window_offset = 8;
        update(&mut app, Action::SelectThumbnail(3));
        assert!(app.selected.is_none());
        update(&mut app, Action::SelectThumbnail(usize::MAX));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_select_out_of_window_position_is_noop() {
        let mut app = test_app_with(sample_templates(10));
        update(&mut app, Action::SelectThumbnail(PAGE_SIZE));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_filmstrip_walkthrough() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Mount), Effect::SpawnLoad);
        update(&mut app, Action::TemplatesLoaded(sample_templates(10)));
        assert_eq!(ids(&app), vec!["t0", "t1", "t2", "t3"]);
        assert!(!app.can_go_previous());
        assert!(app.can_go_next());

        update(&mut app, Action::Next);
        assert_eq!(app.window_offset, 4);
        assert_eq!(ids(&app), vec!["t4", "t5", "t6", "t7"]);

        update(&mut app, Action::SelectThumbnail(1));
        assert_eq!(app.detail().map(|t| t.id.as_str()), Some("t5"));

        update(&mut app, Action::Next);
        assert_eq!(app.window_offset, 8);
        assert_eq!(ids(&app), vec!["t8", "t9"]);
        assert!(!app.can_go_next());

        update(&mut app, Action::Previous);
        update(&mut app, Action::Previous);
        assert_eq!(app.window_offset, 0);
        assert_eq!(app.detail().map(|t| t.id.as_str()), Some("t5"));
        assert!(app.visible_window().iter().all(|t| !app.is_active(t)));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
