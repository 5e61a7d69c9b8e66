//! Record store and the typed mutations applied to it.
//!
//! Every edit the user can make is one [`Mutation`] variant, applied through
//! [`RecordStore::apply`]. Indices that do not name an existing entry turn
//! the mutation into a no-op; the store never reports an error.

use crate::domain::fields::{ListField, PairField, PairKey, ScalarField};
use crate::domain::model::{Person, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetScalar {
        field: ScalarField,
        value: String,
    },
    SetListItem {
        field: ListField,
        index: usize,
        value: String,
    },
    AddListItem {
        field: ListField,
    },
    RemoveListItem {
        field: ListField,
        index: usize,
    },
    SetPairItem {
        field: PairField,
        index: usize,
        key: PairKey,
        value: String,
    },
    AddPair {
        field: PairField,
    },
    RemovePair {
        field: PairField,
        index: usize,
    },
    Reset,
}

/// Outcome of [`RecordStore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    /// The index was out of range; the record is untouched.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    record: Record,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn apply(&mut self, mutation: Mutation) -> Applied {
        tracing::debug!("Applying mutation: {:?}", mutation);

        let applied = match mutation {
            Mutation::SetScalar { field, value } => {
                *self.record.scalar_mut(field) = value;
                Applied::Changed
            }
            Mutation::SetListItem {
                field,
                index,
                value,
            } => match self.record.list_mut(field).get_mut(index) {
                Some(slot) => {
                    *slot = value;
                    Applied::Changed
                }
                None => Applied::Ignored,
            },
            Mutation::AddListItem { field } => {
                self.record.list_mut(field).push(String::new());
                Applied::Changed
            }
            Mutation::RemoveListItem { field, index } => {
                remove_at(self.record.list_mut(field), index)
            }
            Mutation::SetPairItem {
                field,
                index,
                key,
                value,
            } => match self.record.pairs_mut(field).get_mut(index) {
                Some(person) => {
                    match key {
                        PairKey::Name => person.name = value,
                        PairKey::Url => person.url = value,
                    }
                    Applied::Changed
                }
                None => Applied::Ignored,
            },
            Mutation::AddPair { field } => {
                self.record.pairs_mut(field).push(Person::default());
                Applied::Changed
            }
            Mutation::RemovePair { field, index } => {
                remove_at(self.record.pairs_mut(field), index)
            }
            Mutation::Reset => {
                self.reset();
                Applied::Changed
            }
        };

        if applied == Applied::Ignored {
            tracing::debug!("Mutation ignored: index out of range");
        }
        applied
    }

    pub fn set_scalar(&mut self, field: ScalarField, value: impl Into<String>) -> Applied {
        self.apply(Mutation::SetScalar {
            field,
            value: value.into(),
        })
    }

    pub fn set_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> Applied {
        self.apply(Mutation::SetListItem {
            field,
            index,
            value: value.into(),
        })
    }

    pub fn add_list_item(&mut self, field: ListField) -> Applied {
        self.apply(Mutation::AddListItem { field })
    }

    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> Applied {
        self.apply(Mutation::RemoveListItem { field, index })
    }

    pub fn set_pair_item(
        &mut self,
        field: PairField,
        index: usize,
        key: PairKey,
        value: impl Into<String>,
    ) -> Applied {
        self.apply(Mutation::SetPairItem {
            field,
            index,
            key,
            value: value.into(),
        })
    }

    pub fn add_pair(&mut self, field: PairField) -> Applied {
        self.apply(Mutation::AddPair { field })
    }

    pub fn remove_pair(&mut self, field: PairField, index: usize) -> Applied {
        self.apply(Mutation::RemovePair { field, index })
    }

    /// Replaces the whole record with the built-in profile.
    pub fn reset(&mut self) {
        self.record = Record::default();
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Applied {
    if index < items.len() {
        items.remove(index);
        Applied::Changed
    } else {
        Applied::Ignored
    }
}
