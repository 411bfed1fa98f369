use quick_links::{Link, LinkDraft, LinkFormErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Company,
    MyLinks,
}

/// Open add/edit dialog.
pub struct LinkForm {
    pub editing: Option<String>,
    pub draft: LinkDraft,
    pub errors: LinkFormErrors,
}

impl LinkForm {
    pub fn for_new() -> Self {
        Self {
            editing: None,
            draft: LinkDraft::default(),
            errors: LinkFormErrors::default(),
        }
    }

    pub fn for_edit(link: &Link) -> Self {
        Self {
            editing: Some(link.id.clone()),
            draft: link.draft(),
            errors: LinkFormErrors::default(),
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Link"
        } else {
            "Add New Link"
        }
    }

    pub fn blurb(&self) -> &'static str {
        if self.editing.is_some() {
            "Update your link details below."
        } else {
            "Add a new link to your quick access list."
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Link"
        } else {
            "Add Link"
        }
    }
}

pub enum RowAction {
    Edit(Link),
    Delete(String),
}
