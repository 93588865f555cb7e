use thiserror::Error;
use uuid::Uuid;

use crate::cvs::repo::{Cv, CvDraft, CvPatch};
use crate::cvs::store::CvStore;
use crate::error::AppError;
use crate::render;
use crate::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeData, SkillEntry, SocialLink,
};

/// Basic-info fields addressable by the form editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicField {
    Name,
    Title,
    Email,
    Phone,
    Address,
    City,
    State,
    Pincode,
    Intro,
}

/// List sections of the résumé document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Experience,
    Projects,
    Skills,
    Social,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no item at index {index} in {section:?}")]
    IndexOutOfRange { section: Section, index: usize },

    #[error("unknown field `{0}` for {1:?}")]
    UnknownField(String, Section),

    #[error("invalid value for `{0}`: {1}")]
    InvalidValue(String, String),
}

/// In-memory form state mirroring one CV document.
///
/// Every successful mutation marks the session dirty; `save` pushes the
/// entire state as a single write and clears the flag only when the store
/// accepts it. A failed save leaves the state (and the dirty flag) exactly
/// as it was so the user can retry.
#[derive(Debug, Clone)]
pub struct EditorSession {
    owner: Uuid,
    id: Option<Uuid>,
    pub title: String,
    pub layout: String,
    pub data: ResumeData,
    dirty: bool,
}

impl EditorSession {
    pub fn new(owner: Uuid) -> Self {
        Self {
            owner,
            id: None,
            title: "My CV".to_string(),
            layout: render::DEFAULT_LAYOUT.to_string(),
            data: ResumeData::default(),
            dirty: false,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces the whole local state with a fetched record.
    pub fn load(&mut self, cv: &Cv) {
        self.id = Some(cv.id);
        self.title = cv.title.clone();
        self.layout = cv.layout.clone();
        self.data = cv.data.0.clone();
        self.dirty = false;
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.dirty = true;
    }

    pub fn set_layout(&mut self, layout: &str) {
        self.layout = layout.to_string();
        self.dirty = true;
    }

    pub fn update_basic_field(&mut self, field: BasicField, value: &str) {
        let slot = match field {
            BasicField::Name => &mut self.data.basic.name,
            BasicField::Title => &mut self.data.basic.title,
            BasicField::Email => &mut self.data.basic.email,
            BasicField::Phone => &mut self.data.basic.phone,
            BasicField::Address => &mut self.data.basic.address,
            BasicField::City => &mut self.data.basic.city,
            BasicField::State => &mut self.data.basic.state,
            BasicField::Pincode => &mut self.data.basic.pincode,
            BasicField::Intro => &mut self.data.basic.intro,
        };
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        self.dirty = true;
    }

    /// Appends the section's empty default item.
    pub fn add_item(&mut self, section: Section) {
        match section {
            Section::Education => self.data.education.push(EducationEntry::default()),
            Section::Experience => self.data.experience.push(ExperienceEntry::default()),
            Section::Projects => self.data.projects.push(ProjectEntry::default()),
            Section::Skills => self.data.skills.push(SkillEntry::default()),
            Section::Social => self.data.social.push(SocialLink::default()),
        }
        self.dirty = true;
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn remove_item(&mut self, section: Section, index: usize) -> Result<(), EditorError> {
        let len = self.section_len(section);
        if index >= len {
            return Err(EditorError::IndexOutOfRange { section, index });
        }
        match section {
            Section::Education => {
                self.data.education.remove(index);
            }
            Section::Experience => {
                self.data.experience.remove(index);
            }
            Section::Projects => {
                self.data.projects.remove(index);
            }
            Section::Skills => {
                self.data.skills.remove(index);
            }
            Section::Social => {
                self.data.social.remove(index);
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Updates one field of one list item. Field names follow the wire shape
    /// (`teamSize`, not `team_size`).
    pub fn update_item(
        &mut self,
        section: Section,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), EditorError> {
        let len = self.section_len(section);
        if index >= len {
            return Err(EditorError::IndexOutOfRange { section, index });
        }

        let set = |slot: &mut Option<String>| {
            *slot = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        };

        match section {
            Section::Education => {
                let entry = &mut self.data.education[index];
                match field {
                    "degree" => set(&mut entry.degree),
                    "institution" => set(&mut entry.institution),
                    "year" => set(&mut entry.year),
                    "percentage" => set(&mut entry.percentage),
                    _ => return Err(EditorError::UnknownField(field.into(), section)),
                }
            }
            Section::Experience => {
                let entry = &mut self.data.experience[index];
                match field {
                    "org" => set(&mut entry.org),
                    "position" => set(&mut entry.position),
                    "start" => set(&mut entry.start),
                    "end" => set(&mut entry.end),
                    "location" => set(&mut entry.location),
                    "description" => set(&mut entry.description),
                    _ => return Err(EditorError::UnknownField(field.into(), section)),
                }
            }
            Section::Projects => {
                let entry = &mut self.data.projects[index];
                match field {
                    "title" => set(&mut entry.title),
                    "duration" => set(&mut entry.duration),
                    "teamSize" => set(&mut entry.team_size),
                    "technologies" => set(&mut entry.technologies),
                    "description" => set(&mut entry.description),
                    _ => return Err(EditorError::UnknownField(field.into(), section)),
                }
            }
            Section::Skills => {
                let entry = &mut self.data.skills[index];
                match field {
                    "name" => set(&mut entry.name),
                    "level" => {
                        if value.is_empty() {
                            entry.level = None;
                        } else {
                            let level: u8 = value.parse().map_err(|_| {
                                EditorError::InvalidValue(field.into(), value.into())
                            })?;
                            entry.level = Some(level.min(100));
                        }
                    }
                    _ => return Err(EditorError::UnknownField(field.into(), section)),
                }
            }
            Section::Social => {
                let entry = &mut self.data.social[index];
                match field {
                    "platform" => set(&mut entry.platform),
                    "url" => set(&mut entry.url),
                    _ => return Err(EditorError::UnknownField(field.into(), section)),
                }
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Renders the current state through its chosen layout.
    pub fn preview(&self) -> String {
        render::render(&self.layout, &self.data)
    }

    /// Persists the entire state as one write: Update when the session has a
    /// record id, Create otherwise. Failure leaves the state untouched.
    pub async fn save(&mut self, store: &dyn CvStore) -> Result<(), AppError> {
        let saved = match self.id {
            Some(id) => {
                let patch = CvPatch {
                    title: Some(self.title.clone()),
                    layout: Some(self.layout.clone()),
                    data: Some(self.data.clone()),
                    thumbnail: None,
                    is_paid: None,
                };
                store.update(self.owner, id, patch).await?
            }
            None => {
                let draft = CvDraft {
                    title: self.title.clone(),
                    layout: self.layout.clone(),
                    data: self.data.clone(),
                    thumbnail: None,
                };
                store.create(self.owner, draft).await?
            }
        };
        self.id = Some(saved.id);
        self.dirty = false;
        Ok(())
    }

    fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Education => self.data.education.len(),
            Section::Experience => self.data.experience.len(),
            Section::Projects => self.data.projects.len(),
            Section::Skills => self.data.skills.len(),
            Section::Social => self.data.social.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvs::store::testing::{FailingCvStore, InMemoryCvStore};

    fn session() -> EditorSession {
        EditorSession::new(Uuid::new_v4())
    }

    #[test]
    fn new_session_is_clean() {
        let s = session();
        assert!(!s.is_dirty());
        assert_eq!(s.title, "My CV");
        assert_eq!(s.layout, "layout-1");
        assert!(s.id().is_none());
    }

    #[test]
    fn mutations_set_dirty() {
        let mut s = session();
        s.update_basic_field(BasicField::Name, "Ada");
        assert!(s.is_dirty());
        assert_eq!(s.data.basic.name.as_deref(), Some("Ada"));

        let mut s = session();
        s.add_item(Section::Skills);
        assert!(s.is_dirty());

        let mut s = session();
        s.set_title("Portfolio CV");
        assert!(s.is_dirty());
    }

    #[test]
    fn clearing_a_basic_field_stores_none() {
        let mut s = session();
        s.update_basic_field(BasicField::Intro, "hello");
        s.update_basic_field(BasicField::Intro, "");
        assert!(s.data.basic.intro.is_none());
    }

    #[test]
    fn remove_shifts_later_items_down() {
        let mut s = session();
        for name in ["first", "second", "third"] {
            s.add_item(Section::Skills);
            let idx = s.data.skills.len() - 1;
            s.update_item(Section::Skills, idx, "name", name).unwrap();
        }

        s.remove_item(Section::Skills, 0).unwrap();
        assert_eq!(s.data.skills.len(), 2);
        assert_eq!(s.data.skills[0].name.as_deref(), Some("second"));
        assert_eq!(s.data.skills[1].name.as_deref(), Some("third"));
    }

    #[test]
    fn remove_out_of_range_is_an_error_and_keeps_state() {
        let mut s = session();
        s.add_item(Section::Education);
        let before = s.data.clone();

        let err = s.remove_item(Section::Education, 5).unwrap_err();
        assert_eq!(
            err,
            EditorError::IndexOutOfRange {
                section: Section::Education,
                index: 5
            }
        );
        assert_eq!(s.data, before);
    }

    #[test]
    fn update_item_rejects_unknown_field() {
        let mut s = session();
        s.add_item(Section::Social);
        let err = s
            .update_item(Section::Social, 0, "followers", "12")
            .unwrap_err();
        assert!(matches!(err, EditorError::UnknownField(_, Section::Social)));
    }

    #[test]
    fn skill_level_parses_and_clamps() {
        let mut s = session();
        s.add_item(Section::Skills);
        s.update_item(Section::Skills, 0, "level", "90").unwrap();
        assert_eq!(s.data.skills[0].level, Some(90));

        s.update_item(Section::Skills, 0, "level", "200").unwrap();
        assert_eq!(s.data.skills[0].level, Some(100));

        let err = s
            .update_item(Section::Skills, 0, "level", "ninety")
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidValue(_, _)));
    }

    #[test]
    fn update_item_uses_wire_field_names() {
        let mut s = session();
        s.add_item(Section::Projects);
        s.update_item(Section::Projects, 0, "teamSize", "4").unwrap();
        assert_eq!(s.data.projects[0].team_size.as_deref(), Some("4"));
    }

    #[tokio::test]
    async fn first_save_creates_and_adopts_the_record_id() {
        let store = InMemoryCvStore::default();
        let mut s = session();
        s.update_basic_field(BasicField::Name, "Ada");

        s.save(&store).await.expect("save");
        assert!(!s.is_dirty());
        let id = s.id().expect("id adopted");

        let stored = store.get(s.owner, id).await.expect("stored");
        assert_eq!(stored.data.0.basic.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn second_save_updates_the_same_record() {
        let store = InMemoryCvStore::default();
        let mut s = session();
        s.save(&store).await.expect("create");
        let id = s.id().unwrap();

        s.update_basic_field(BasicField::Name, "Grace");
        s.save(&store).await.expect("update");
        assert_eq!(s.id(), Some(id));

        let stored = store.get(s.owner, id).await.expect("stored");
        assert_eq!(stored.data.0.basic.name.as_deref(), Some("Grace"));
    }

    #[tokio::test]
    async fn failed_save_leaves_state_dirty_and_unchanged() {
        let store = FailingCvStore;
        let mut s = session();
        s.update_basic_field(BasicField::Name, "Ada");
        let before = s.data.clone();

        let err = s.save(&store).await.expect_err("save should fail");
        assert!(matches!(err, AppError::Database(_)));
        assert!(s.is_dirty());
        assert!(s.id().is_none());
        assert_eq!(s.data, before);
    }

    #[tokio::test]
    async fn load_replaces_state_and_clears_dirty() {
        let store = InMemoryCvStore::default();
        let mut original = session();
        original.set_title("Saved CV");
        original.update_basic_field(BasicField::Name, "Ada");
        original.save(&store).await.expect("save");
        let cv = store
            .get(original.owner, original.id().unwrap())
            .await
            .expect("fetch");

        let mut s = EditorSession::new(original.owner);
        s.update_basic_field(BasicField::Name, "scratch");
        s.load(&cv);
        assert!(!s.is_dirty());
        assert_eq!(s.title, "Saved CV");
        assert_eq!(s.data.basic.name.as_deref(), Some("Ada"));
        assert_eq!(s.id(), Some(cv.id));
    }

    #[test]
    fn preview_uses_the_session_layout() {
        let mut s = session();
        s.set_layout("layout-3");
        let html = s.preview();
        assert!(html.contains("cv-creative"));
    }
}
