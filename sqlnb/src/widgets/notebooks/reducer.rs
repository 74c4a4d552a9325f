use super::event::{NotebooksEffect, NotebooksIntent};
use super::model::NotebookSummary;
use super::state::NotebooksState;

/// Runtime context for the notebooks reducer.
pub(crate) struct NotebooksCtx<'a> {
    /// Notebook listing currently shown in the pane.
    pub(crate) notebooks: &'a [NotebookSummary],
}

/// Reduce a notebooks intent into state updates and an effect.
pub(crate) fn reduce(
    state: &mut NotebooksState,
    intent: NotebooksIntent,
    ctx: &NotebooksCtx<'_>,
) -> Option<NotebooksEffect> {
    match intent {
        NotebooksIntent::NotebookPressed { name } => {
            reduce_notebook_pressed(state, name, ctx)
        },
        NotebooksIntent::NotebookHovered { name } => {
            state.set_hovered(name);
            None
        },
        NotebooksIntent::NewNotebookPressed => reduce_new_notebook(state),
        NotebooksIntent::NotebookCreated => {
            state.set_creating(false);
            None
        },
        NotebooksIntent::CloseNotebook => {
            if let Some(name) = state.open() {
                log::debug!("notebook {name} closed");
            }
            state.set_open(None);
            None
        },
    }
}

fn reduce_notebook_pressed(
    state: &mut NotebooksState,
    name: String,
    ctx: &NotebooksCtx<'_>,
) -> Option<NotebooksEffect> {
    if !ctx.notebooks.iter().any(|notebook| notebook.name == name) {
        log::warn!("notebook press on unknown notebook: {name}");
        return None;
    }

    if state.open() == Some(name.as_str()) {
        return None;
    }

    log::info!("notebook activated: {name}");
    state.set_open(Some(name.clone()));
    Some(NotebooksEffect::NotebookActivated { name })
}

/// New notebooks may only be requested from the empty-notebook screen, and
/// only one request is in flight at a time.
fn reduce_new_notebook(state: &mut NotebooksState) -> Option<NotebooksEffect> {
    if let Some(open) = state.open() {
        log::warn!("new notebook request ignored while {open} is open");
        return None;
    }

    if state.is_creating() {
        log::debug!("new notebook request already pending");
        return None;
    }

    log::info!("new notebook requested");
    state.set_creating(true);
    Some(NotebooksEffect::NewNotebookRequested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::notebooks::model::NotebookStatus;

    fn listing() -> Vec<NotebookSummary> {
        vec![
            NotebookSummary::new("sales.sql.nb", NotebookStatus::Running),
            NotebookSummary::new("scratch.sql.nb", NotebookStatus::Stopped),
        ]
    }

    fn press(name: &str) -> NotebooksIntent {
        NotebooksIntent::NotebookPressed {
            name: String::from(name),
        }
    }

    #[test]
    fn given_no_open_notebook_when_new_pressed_then_request_is_emitted() {
        let notebooks = listing();
        let mut state = NotebooksState::default();

        let effect = reduce(
            &mut state,
            NotebooksIntent::NewNotebookPressed,
            &NotebooksCtx {
                notebooks: &notebooks,
            },
        );

        assert_eq!(effect, Some(NotebooksEffect::NewNotebookRequested));
    }

    #[test]
    fn given_open_notebook_when_new_pressed_then_request_is_ignored() {
        let notebooks = listing();
        let ctx = NotebooksCtx {
            notebooks: &notebooks,
        };
        let mut state = NotebooksState::default();
        let _ = reduce(&mut state, press("sales.sql.nb"), &ctx);

        let effect =
            reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);

        assert_eq!(effect, None);
        assert_eq!(state.open(), Some("sales.sql.nb"));
    }

    #[test]
    fn given_pending_request_when_new_pressed_again_then_only_one_is_emitted() {
        let notebooks = listing();
        let ctx = NotebooksCtx {
            notebooks: &notebooks,
        };
        let mut state = NotebooksState::default();

        let first =
            reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);
        let second =
            reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);

        assert_eq!(first, Some(NotebooksEffect::NewNotebookRequested));
        assert_eq!(second, None);
        assert!(state.is_creating());
    }

    #[test]
    fn given_pending_request_when_created_then_new_requests_are_accepted() {
        let notebooks = listing();
        let ctx = NotebooksCtx {
            notebooks: &notebooks,
        };
        let mut state = NotebooksState::default();
        let _ = reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);

        let created =
            reduce(&mut state, NotebooksIntent::NotebookCreated, &ctx);
        let effect =
            reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);

        assert_eq!(created, None);
        assert_eq!(effect, Some(NotebooksEffect::NewNotebookRequested));
    }

    #[test]
    fn given_listed_notebook_when_pressed_then_it_opens_and_is_announced() {
        let notebooks = listing();
        let mut state = NotebooksState::default();

        let effect = reduce(
            &mut state,
            press("scratch.sql.nb"),
            &NotebooksCtx {
                notebooks: &notebooks,
            },
        );

        assert_eq!(
            effect,
            Some(NotebooksEffect::NotebookActivated {
                name: String::from("scratch.sql.nb"),
            })
        );
        assert_eq!(state.open(), Some("scratch.sql.nb"));
    }

    #[test]
    fn given_open_notebook_when_pressed_again_then_no_effect_is_emitted() {
        let notebooks = listing();
        let ctx = NotebooksCtx {
            notebooks: &notebooks,
        };
        let mut state = NotebooksState::default();
        let _ = reduce(&mut state, press("sales.sql.nb"), &ctx);

        let effect = reduce(&mut state, press("sales.sql.nb"), &ctx);

        assert_eq!(effect, None);
    }

    #[test]
    fn given_unknown_notebook_when_pressed_then_state_is_unchanged() {
        let notebooks = listing();
        let mut state = NotebooksState::default();

        let effect = reduce(
            &mut state,
            press("missing.sql.nb"),
            &NotebooksCtx {
                notebooks: &notebooks,
            },
        );

        assert_eq!(effect, None);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn given_open_notebook_when_closed_then_new_notebook_is_allowed_again() {
        let notebooks = listing();
        let ctx = NotebooksCtx {
            notebooks: &notebooks,
        };
        let mut state = NotebooksState::default();
        let _ = reduce(&mut state, press("sales.sql.nb"), &ctx);

        let closed = reduce(&mut state, NotebooksIntent::CloseNotebook, &ctx);
        let effect =
            reduce(&mut state, NotebooksIntent::NewNotebookPressed, &ctx);

        assert_eq!(closed, None);
        assert_eq!(state.open(), None);
        assert_eq!(effect, Some(NotebooksEffect::NewNotebookRequested));
    }

    #[test]
    fn given_hover_intent_when_reduced_then_hover_tracks_cursor() {
        let notebooks = listing();
        let mut state = NotebooksState::default();

        let _ = reduce(
            &mut state,
            NotebooksIntent::NotebookHovered {
                name: Some(String::from("sales.sql.nb")),
            },
            &NotebooksCtx {
                notebooks: &notebooks,
            },
        );

        assert_eq!(state.hovered(), Some("sales.sql.nb"));
    }
}
