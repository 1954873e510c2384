//! Instance provider
//!
//! The component that coordinates schemas and stores behind the CRUD
//! surface.
//!
//! ## Responsibilities
//! - Route every request by namespace, then by class name
//! - Validate keys and records against the class schema before the store
//!   is touched
//! - Gate mutations behind the runtime modifications flag
//! - Own the per-class stores outright: construction seeds them, `reset`
//!   rebuilds them, and nothing outside the provider can reach them
//!
//! ## Check Order
//! Every operation performs its checks in a fixed order — namespace,
//! class, values, key, existence, write gate — so a request that fails
//! several ways always reports the same status.

use crate::config::Config;
use crate::error::{KeyrackError, Result};
use crate::key::Key;
use crate::record::{Property, Record};
use crate::schema::Schema;
use crate::store::ObjectStore;
use crate::value::Value;

use super::filter::RecordFilter;

/// The query language the provider advertises for `query` requests
pub const QUERY_LANGUAGE: &str = "WQL";

/// Seeds a freshly built class store with its initial entries
pub type SeedFn = fn(&mut ObjectStore);

/// A class a provider agrees to serve
pub struct ClassRegistration {
    schema: Schema,
    queryable: bool,
    seed: Option<SeedFn>,
}

impl ClassRegistration {
    /// Register a class by its schema; not queryable, no seed
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            queryable: false,
            seed: None,
        }
    }

    /// Allow `query` against this class
    pub fn queryable(mut self) -> Self {
        self.queryable = true;
        self
    }

    /// Seed the class store at construction and on every reset
    pub fn with_seed(mut self, seed: SeedFn) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Per-class runtime state
struct ClassState {
    schema: Schema,
    queryable: bool,
    seed: Option<SeedFn>,
    store: ObjectStore,
}

/// A provider instance: registered classes, their stores, and the
/// runtime write gate
pub struct InstanceProvider {
    config: Config,
    classes: Vec<ClassState>,
    modifications_enabled: bool,
}

impl InstanceProvider {
    /// Create a provider with no registered classes
    pub fn new(config: Config) -> Self {
        let modifications_enabled = config.enable_modifications;
        Self {
            config,
            classes: Vec::new(),
            modifications_enabled,
        }
    }

    /// Register a class and build (and seed) its store.
    ///
    /// Fails with [`KeyrackError::AlreadyExists`] if a class with the
    /// same name is already registered.
    pub fn register(&mut self, registration: ClassRegistration) -> Result<()> {
        let class = registration.schema.class();
        if self.find_class(class).is_some() {
            return Err(KeyrackError::AlreadyExists(class.to_string()));
        }

        let mut store = ObjectStore::new(&self.config.ordering_field);
        if let Some(seed) = registration.seed {
            seed(&mut store);
        }

        tracing::info!(class, entries = store.len(), "class registered");

        self.classes.push(ClassState {
            schema: registration.schema,
            queryable: registration.queryable,
            seed: registration.seed,
            store,
        });

        Ok(())
    }

    /// The namespace this provider answers for
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Whether create/set/delete are currently allowed
    pub fn modifications_enabled(&self) -> bool {
        self.modifications_enabled
    }

    /// Read-only access to a class's store, for callers layering their
    /// own logic over a routed class
    pub fn store(&self, class: &str) -> Result<&ObjectStore> {
        self.class(class).map(|state| &state.store)
    }

    // =========================================================================
    // CRUD Operations
    // =========================================================================

    /// Create an instance of `class` from `record`.
    ///
    /// The key is derived from the record's key properties. Duplicate
    /// detection uses the partial matcher, so a record whose key fields
    /// satisfy an existing entry's key is refused even if the field sets
    /// differ elsewhere.
    pub fn create(&mut self, namespace: &str, class: &str, record: Record) -> Result<Key> {
        tracing::debug!(namespace, class, "create");

        self.check_namespace(namespace)?;
        let enabled = self.modifications_enabled;
        let state = self.class_mut(class)?;

        // Step 1: Derive the key from the record's key properties
        let key = state.schema.validate_record(&record, false).ok_or_else(|| {
            KeyrackError::InvalidParameter(format!(
                "record is missing key properties of class {}",
                state.schema.class()
            ))
        })?;

        // Step 2: Check the property values
        state.schema.check_values(&record)?;

        // Step 3: Refuse duplicates
        if state.store.fuzzy_find(&key).is_some() {
            return Err(KeyrackError::AlreadyExists(key.to_string()));
        }

        // Step 4: The write gate
        if !enabled {
            return Err(KeyrackError::InvalidParameter(
                "modifications are disabled".to_string(),
            ));
        }

        state.store.insert(key.clone(), record)?;

        Ok(key)
    }

    /// Fetch the record stored under `key`.
    ///
    /// The key must carry the class's full key-field set; extra fields
    /// and field order are tolerated by the partial matcher.
    pub fn get(&self, namespace: &str, class: &str, key: &Key) -> Result<&Record> {
        tracing::debug!(namespace, class, %key, "get");

        self.check_namespace(namespace)?;
        let state = self.class(class)?;

        if !state.schema.validate_key(key) {
            return Err(KeyrackError::InvalidParameter(format!("bad key: {}", key)));
        }

        let index = state
            .store
            .fuzzy_find(key)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))?;

        state
            .store
            .get(index)
            .map(|entry| &entry.record)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))
    }

    /// Replace the record stored under `key` with `record`.
    pub fn set(&mut self, namespace: &str, class: &str, key: &Key, record: Record) -> Result<()> {
        tracing::debug!(namespace, class, %key, "set");

        self.check_namespace(namespace)?;
        let enabled = self.modifications_enabled;
        let state = self.class_mut(class)?;

        // Step 1: Check the property values
        state.schema.check_values(&record)?;

        // Step 2: Check the key
        if !state.schema.validate_key(key) {
            return Err(KeyrackError::InvalidParameter(format!("bad key: {}", key)));
        }

        // Step 3: The target must exist
        let index = state
            .store
            .fuzzy_find(key)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))?;

        // Step 4: The write gate
        if !enabled {
            return Err(KeyrackError::InvalidParameter(
                "modifications are disabled".to_string(),
            ));
        }

        // Step 5: Swap the entry, keyed by the caller's key
        state.store.remove_entry(index);
        state.store.insert(key.clone(), record)?;

        Ok(())
    }

    /// Delete the instance stored under `key`, returning its record
    pub fn delete(&mut self, namespace: &str, class: &str, key: &Key) -> Result<Record> {
        tracing::debug!(namespace, class, %key, "delete");

        self.check_namespace(namespace)?;
        let enabled = self.modifications_enabled;
        let state = self.class_mut(class)?;

        if !state.schema.validate_key(key) {
            return Err(KeyrackError::InvalidParameter(format!("bad key: {}", key)));
        }

        let index = state
            .store
            .fuzzy_find(key)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))?;

        if !enabled {
            return Err(KeyrackError::InvalidParameter(
                "modifications are disabled".to_string(),
            ));
        }

        state
            .store
            .remove_entry(index)
            .map(|entry| entry.record)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))
    }

    // =========================================================================
    // Enumeration and Query
    // =========================================================================

    /// All keys of `class`, ascending by the ordering field
    pub fn enumerate_names(&self, namespace: &str, class: &str) -> Result<Vec<Key>> {
        tracing::debug!(namespace, class, "enumerate names");

        self.check_namespace(namespace)?;
        let state = self.class(class)?;

        Ok(state.store.keys().cloned().collect())
    }

    /// All records of `class`, ascending by the ordering field
    pub fn enumerate(&self, namespace: &str, class: &str) -> Result<Vec<Record>> {
        tracing::debug!(namespace, class, "enumerate");

        self.check_namespace(namespace)?;
        let state = self.class(class)?;

        Ok(state.store.enumerate().cloned().collect())
    }

    /// Filter `class`'s records through a query predicate.
    ///
    /// The class must be registered queryable and `language` must name
    /// the advertised query language; anything else is `NotSupported`.
    pub fn query(
        &self,
        namespace: &str,
        class: &str,
        language: &str,
        filter: &dyn RecordFilter,
    ) -> Result<Vec<Record>> {
        tracing::debug!(namespace, class, language, "query");

        self.check_namespace(namespace)?;
        let state = self.class(class)?;

        if !state.queryable {
            return Err(KeyrackError::NotSupported(format!(
                "class {} does not answer queries",
                state.schema.class()
            )));
        }

        if !language.eq_ignore_ascii_case(QUERY_LANGUAGE) {
            return Err(KeyrackError::NotSupported(format!(
                "query language {}",
                language
            )));
        }

        Ok(state
            .store
            .enumerate()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    // =========================================================================
    // Control Methods
    // =========================================================================

    /// Invoke a control method against a registered class.
    ///
    /// - `ping` — no arguments, answers `"pong"`
    /// - `enableModifications` — one boolean argument named `state`,
    ///   toggles the write gate, answers `true`
    /// - `reset` — no arguments, rebuilds every class store from its
    ///   seed and disables modifications, answers `true`
    ///
    /// Method names dispatch case-insensitively; anything else is
    /// `MethodNotAvailable`.
    pub fn invoke(
        &mut self,
        namespace: &str,
        class: &str,
        method: &str,
        args: &[Property],
    ) -> Result<Value> {
        tracing::debug!(namespace, class, method, args = args.len(), "invoke");

        self.check_namespace(namespace)?;
        self.class(class)?;

        if method.eq_ignore_ascii_case("ping") {
            return Ok(Value::String("pong".to_string()));
        }

        if method.eq_ignore_ascii_case("enableModifications") {
            let arg = match args {
                [arg] => arg,
                _ => {
                    return Err(KeyrackError::InvalidParameter(
                        "enableModifications takes exactly one argument".to_string(),
                    ))
                }
            };

            if !arg.name.eq_ignore_ascii_case("state") {
                return Err(KeyrackError::InvalidParameter(format!(
                    "unexpected argument: {}",
                    arg.name
                )));
            }

            let enabled = match arg.value {
                Value::Boolean(enabled) => enabled,
                _ => {
                    return Err(KeyrackError::InvalidParameter(
                        "argument state must be a boolean".to_string(),
                    ))
                }
            };

            tracing::debug!(enabled, "setting modifications gate");
            self.modifications_enabled = enabled;

            return Ok(Value::Boolean(true));
        }

        if method.eq_ignore_ascii_case("reset") {
            if !args.is_empty() {
                return Err(KeyrackError::InvalidParameter(
                    "reset takes no arguments".to_string(),
                ));
            }

            self.reset();

            return Ok(Value::Boolean(true));
        }

        Err(KeyrackError::MethodNotAvailable(method.to_string()))
    }

    /// Throw away every class store, rebuild from the seeds, and disable
    /// modifications until explicitly re-enabled.
    pub fn reset(&mut self) {
        tracing::info!("resetting provider state");

        self.modifications_enabled = false;

        for state in &mut self.classes {
            state.store = ObjectStore::new(&self.config.ordering_field);
            if let Some(seed) = state.seed {
                seed(&mut state.store);
            }
        }
    }

    // =========================================================================
    // Routing Helpers
    // =========================================================================

    fn check_namespace(&self, namespace: &str) -> Result<()> {
        if !namespace.eq_ignore_ascii_case(&self.config.namespace) {
            return Err(KeyrackError::InvalidNamespace(namespace.to_string()));
        }
        Ok(())
    }

    fn find_class(&self, class: &str) -> Option<usize> {
        self.classes
            .iter()
            .position(|state| state.schema.class().eq_ignore_ascii_case(class))
    }

    fn class(&self, class: &str) -> Result<&ClassState> {
        self.find_class(class)
            .map(|index| &self.classes[index])
            .ok_or_else(|| KeyrackError::InvalidClass(class.to_string()))
    }

    fn class_mut(&mut self, class: &str) -> Result<&mut ClassState> {
        match self.find_class(class) {
            Some(index) => Ok(&mut self.classes[index]),
            None => Err(KeyrackError::InvalidClass(class.to_string())),
        }
    }
}
