//! Lifecycle state and the save state machine.

use crate::persistence::error::PersistenceError;
use crate::record::Record;
use crate::registry::RuleRegistry;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};

/// Where a record stands in the save lifecycle.
///
/// `New` covers everything before the first successful create. `Saved` is
/// sticky: once a record has been created, later update failures leave it
/// saved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    #[default]
    New,
    Saved,
}

/// Drives `save` for one record: gate on validity, then dispatch to the
/// create or update hook depending on the record's lifecycle state.
pub struct Lifecycle<'a> {
    validator: Validator<'a>,
}

impl<'a> Lifecycle<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self {
            validator: Validator::new(registry),
        }
    }

    /// Attempt to save `record`.
    ///
    /// An invalid record fails immediately without touching any hook. A
    /// new record goes through `custom_create` and becomes saved on
    /// success; a saved record goes through `custom_update`, whose result
    /// is returned verbatim.
    pub fn save(&self, record: &mut dyn Record) -> bool {
        if !self.validator.is_valid(record) {
            return false;
        }
        match record.state().lifecycle() {
            LifecycleState::New => self.create(record),
            LifecycleState::Saved => record.custom_update(),
        }
    }

    /// Like [`save`](Lifecycle::save), but a failed save becomes
    /// [`PersistenceError::RecordNotSaved`].
    pub fn save_strict(&self, record: &mut dyn Record) -> Result<(), PersistenceError> {
        if self.save(record) {
            Ok(())
        } else {
            Err(PersistenceError::RecordNotSaved)
        }
    }

    fn create(&self, record: &mut dyn Record) -> bool {
        if record.custom_create() {
            record.state_mut().mark_saved();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AttributeMap, LogSink, MemorySink, RecordState, TypeInfo};
    use crate::registry::Rule;
    use serde_json::Value;

    static ACCOUNT: TypeInfo = TypeInfo::new("LifecycleTestAccount", None, &["name"]);

    #[derive(Default)]
    struct Account {
        state: RecordState,
        attributes: AttributeMap,
        create_result: bool,
        update_result: bool,
        create_calls: usize,
        update_calls: usize,
    }

    impl Record for Account {
        fn type_info(&self) -> &'static TypeInfo {
            &ACCOUNT
        }

        fn state(&self) -> &RecordState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut RecordState {
            &mut self.state
        }

        fn read_attribute(&self, key: &str) -> Value {
            self.attributes.get(key).cloned().unwrap_or(Value::Null)
        }

        fn write_attribute(&mut self, key: &str, value: Value) {
            self.attributes.insert(key.to_string(), value);
        }

        fn custom_create(&mut self) -> bool {
            self.create_calls += 1;
            self.create_result
        }

        fn custom_update(&mut self) -> bool {
            self.update_calls += 1;
            self.update_result
        }
    }

    fn saved_account(lifecycle: &Lifecycle<'_>) -> Account {
        let mut account = Account {
            create_result: true,
            ..Account::default()
        };
        assert!(lifecycle.save(&mut account));
        account
    }

    #[test]
    fn failed_create_leaves_the_record_new() {
        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);
        let mut account = Account::default();

        assert!(!lifecycle.save(&mut account));
        assert_eq!(account.create_calls, 1);
        assert!(account.is_new_record());
    }

    #[test]
    fn successful_create_transitions_to_saved() {
        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);

        let account = saved_account(&lifecycle);
        assert_eq!(account.create_calls, 1);
        assert!(account.is_saved_record());
        assert!(!account.is_new_record());
    }

    #[test]
    fn later_saves_dispatch_to_update_not_create() {
        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);
        let mut account = saved_account(&lifecycle);
        account.update_result = true;

        assert!(lifecycle.save(&mut account));
        assert_eq!(account.create_calls, 1);
        assert_eq!(account.update_calls, 1);
    }

    #[test]
    fn a_failed_update_keeps_the_record_saved() {
        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);
        let mut account = saved_account(&lifecycle);
        account.update_result = false;

        assert!(!lifecycle.save(&mut account));
        assert_eq!(account.update_calls, 1);
        assert!(account.is_saved_record());

        account.update_result = true;
        assert!(lifecycle.save(&mut account));
        assert_eq!(account.update_calls, 2);
    }

    #[test]
    fn invalid_records_never_reach_the_hooks() {
        let registry = RuleRegistry::new();
        registry.register(
            &ACCOUNT,
            Rule::check(|record: &mut dyn Record| {
                record.errors_mut().add("name", "is wrong");
                false
            }),
        );

        let lifecycle = Lifecycle::new(&registry);
        let mut account = Account {
            create_result: true,
            ..Account::default()
        };

        assert!(!lifecycle.save(&mut account));
        assert_eq!(account.create_calls, 0);
        assert_eq!(account.update_calls, 0);
        assert!(account.is_new_record());
        assert_eq!(account.errors().messages_for("name"), ["is wrong"]);
    }

    #[test]
    fn save_strict_fails_exactly_when_save_would() {
        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);
        let mut account = Account::default();

        assert_eq!(
            lifecycle.save_strict(&mut account),
            Err(PersistenceError::RecordNotSaved)
        );

        account.create_result = true;
        assert_eq!(lifecycle.save_strict(&mut account), Ok(()));
        assert!(account.is_saved_record());
    }

    #[test]
    fn unoverridden_hooks_warn_and_never_persist() {
        static GHOST: TypeInfo = TypeInfo::new("LifecycleTestGhost", None, &[]);

        #[derive(Default)]
        struct Ghost {
            state: RecordState,
            sink: MemorySink,
        }

        impl Record for Ghost {
            fn type_info(&self) -> &'static TypeInfo {
                &GHOST
            }

            fn state(&self) -> &RecordState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut RecordState {
                &mut self.state
            }

            fn read_attribute(&self, _key: &str) -> Value {
                Value::Null
            }

            fn write_attribute(&mut self, _key: &str, _value: Value) {}

            fn logger(&self) -> &dyn LogSink {
                &self.sink
            }
        }

        let registry = RuleRegistry::new();
        let lifecycle = Lifecycle::new(&registry);
        let mut ghost = Ghost::default();

        assert!(!lifecycle.save(&mut ghost));
        assert!(ghost.is_new_record());
        assert_eq!(ghost.sink.messages(), ["Called the empty custom_create stub."]);
    }

    #[test]
    fn lifecycle_state_defaults_to_new_and_serializes() {
        assert_eq!(LifecycleState::default(), LifecycleState::New);

        let json = serde_json::to_string(&LifecycleState::Saved).unwrap();
        let state: LifecycleState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, LifecycleState::Saved);
    }
}
