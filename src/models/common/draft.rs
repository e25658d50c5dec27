/// 编辑草稿：新建，或编辑某条已有记录
#[derive(Debug, Clone, PartialEq)]
pub enum Draft<F> {
    New(F),
    Editing { id: i64, form: F },
}

impl<F> Draft<F> {
    pub fn form(&self) -> &F {
        match self {
            Draft::New(form) | Draft::Editing { form, .. } => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut F {
        match self {
            Draft::New(form) | Draft::Editing { form, .. } => form,
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            Draft::New(_) => None,
            Draft::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Draft::New(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_accessors() {
        let mut draft = Draft::Editing {
            id: 7,
            form: String::from("a"),
        };
        assert_eq!(draft.editing_id(), Some(7));
        draft.form_mut().push('b');
        assert_eq!(draft.form(), "ab");
        assert!(!draft.is_new());
        assert!(Draft::New(0).is_new());
    }
}
