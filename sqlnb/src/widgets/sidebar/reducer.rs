use super::event::{SidebarEffect, SidebarIntent};
use super::state::SidebarState;

/// Reduce a sidebar intent into state updates and an effect.
pub(super) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
) -> Option<SidebarEffect> {
    match intent {
        SidebarIntent::ToggleSection(section) => {
            let active = state.toggle(section);
            match active {
                Some(active) => log::debug!("sidebar section {active} active"),
                None => log::debug!("sidebar section {section} collapsed"),
            }

            Some(SidebarEffect::SectionToggled { section, active })
        },
    }
}
