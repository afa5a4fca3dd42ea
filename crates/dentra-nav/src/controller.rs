use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::NavError;
use crate::policy::AccessPolicy;
use crate::registry::{SectionRegistry, SectionSpec};
use crate::session::SessionState;

/// What the embedder must render after a successful navigation: the
/// section now active, the tab restored within it (if it has any), the
/// hooks to run in order, and the derived header title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub section: String,
    pub tab: Option<String>,
    pub hooks: Vec<String>,
    pub title: String,
}

/// Outcome of a navigation request. Every request resolves to exactly
/// one of these; the controller never panics on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// The requested target is now active.
    Entered(Activation),
    /// Permission denied. `recovery` carries the activation of the
    /// role's landing section, or `None` when the session is already
    /// there and nothing needs to change.
    Denied {
        requested: String,
        recovery: Option<Activation>,
    },
    /// Nothing happened: unknown target, or the target was already
    /// active.
    NoChange,
}

/// The navigation controller. Stateless itself; all mutable view state
/// lives in the [`SessionState`] passed to each call.
#[derive(Debug, Clone)]
pub struct NavController {
    registry: SectionRegistry,
    policy: AccessPolicy,
}

impl NavController {
    pub fn new(registry: SectionRegistry, policy: AccessPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn standard() -> Self {
        Self::new(SectionRegistry::standard(), AccessPolicy::standard())
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Navigate to a section. The permission check runs before any
    /// state changes; a denied request recovers to the role's landing
    /// section instead of leaving the view stuck. Recovery to a section
    /// the session is already on changes nothing, so a denied request
    /// can never loop.
    pub fn go_to_section(
        &self,
        session: &mut SessionState,
        section_id: &str,
    ) -> Result<Navigation, NavError> {
        if !self.policy.is_permitted(session.role, section_id) {
            warn!(
                role = %session.role,
                section = section_id,
                "navigation denied"
            );
            let recovery_id = self
                .policy
                .first_permitted(session.role)
                .ok_or(NavError::NoPermittedSections { role: session.role })?
                .to_string();
            let recovery = if session.current_section.as_deref() == Some(recovery_id.as_str()) {
                None
            } else {
                match self.registry.section(&recovery_id) {
                    Some(spec) => Some(self.activate(session, spec)),
                    None => {
                        warn!(section = %recovery_id, "recovery section missing from registry");
                        None
                    }
                }
            };
            return Ok(Navigation::Denied {
                requested: section_id.to_string(),
                recovery,
            });
        }

        let Some(spec) = self.registry.section(section_id) else {
            warn!(section = section_id, "unknown section");
            return Ok(Navigation::NoChange);
        };
        Ok(Navigation::Entered(self.activate(session, spec)))
    }

    /// Switch tabs within a section. Idempotent: switching to the tab
    /// already recorded for the section is a no-op and fires no hooks.
    pub fn go_to_tab(
        &self,
        session: &mut SessionState,
        section_id: &str,
        tab_id: &str,
    ) -> Navigation {
        let Some(spec) = self.registry.section(section_id) else {
            warn!(section = section_id, "unknown section");
            return Navigation::NoChange;
        };
        let Some(tab) = spec.tab(tab_id) else {
            warn!(section = section_id, tab = tab_id, "unknown tab");
            return Navigation::NoChange;
        };
        if session.active_tab(section_id) == Some(tab_id) {
            return Navigation::NoChange;
        }
        session
            .current_tab
            .insert(spec.id.clone(), tab.id.clone());
        info!(section = %spec.id, tab = %tab.id, "tab switched");
        Navigation::Entered(Activation {
            section: spec.id.clone(),
            tab: Some(tab.id.clone()),
            hooks: tab.on_enter.clone(),
            title: spec.title(),
        })
    }

    /// Make a section active: record it, restore its tab, and collect
    /// the hooks to run. The remembered tab wins when the section still
    /// declares it; otherwise the first declared tab; a stale entry for
    /// a tabless section is dropped.
    fn activate(&self, session: &mut SessionState, spec: &SectionSpec) -> Activation {
        session.current_section = Some(spec.id.clone());

        let restored = session
            .active_tab(&spec.id)
            .and_then(|remembered| spec.tab(remembered))
            .or_else(|| spec.first_tab());
        let mut hooks = spec.on_show.clone();
        let tab = match restored {
            Some(tab) => {
                session
                    .current_tab
                    .insert(spec.id.clone(), tab.id.clone());
                hooks.extend(tab.on_enter.iter().cloned());
                Some(tab.id.clone())
            }
            None => {
                session.current_tab.remove(&spec.id);
                None
            }
        };
        info!(section = %spec.id, tab = tab.as_deref().unwrap_or("-"), "section shown");
        Activation {
            section: spec.id.clone(),
            tab,
            hooks,
            title: spec.title(),
        }
    }
}
