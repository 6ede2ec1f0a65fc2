//! process::storage — name-keyed registry of process families.
//!
//! Purpose
//! -------
//! Hold the set of processes a scheduler may assign to segments. The
//! registry is a map from registry key to a [`ProcessKind`] built once from
//! a [`ProcessConfig`]; lookups never construct processes.
//!
//! Key behaviors
//! -------------
//! - [`ProcessStorage::new`] registers the requested names, or every
//!   built-in family when `names` is `None`.
//! - [`ProcessStorage::remove_processes`] ignores unknown names with a
//!   `warn!` instead of failing.
//! - [`ProcessStorage::get_random_processes`] draws uniformly with
//!   replacement.
//!
//! Invariants & assumptions
//! ------------------------
//! - Keys always equal the stored process's `name()`.
//! - Iteration order (and therefore random selection given a seeded RNG) is
//!   the lexicographic key order.
use crate::process::{
    core::options::ProcessConfig,
    errors::{ProcessError, ProcessResult},
    models::{ALL_PROCESS_NAMES, ProcessKind},
    traits::Process,
};
use rand::{Rng, RngCore};
use std::collections::BTreeMap;

/// ProcessStorage — registry of available process families.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStorage {
    config: ProcessConfig,
    processes: BTreeMap<String, ProcessKind>,
}

impl ProcessStorage {
    /// Build a registry over `names` (all built-in families when `None`).
    ///
    /// # Errors
    /// [`ProcessError::UnknownProcess`] for a name that is not a built-in
    /// family.
    pub fn new(names: Option<&[&str]>, config: ProcessConfig) -> ProcessResult<Self> {
        let mut storage = ProcessStorage { config, processes: BTreeMap::new() };
        storage.add_processes(names.unwrap_or(&ALL_PROCESS_NAMES))?;
        Ok(storage)
    }

    /// Register `names`; already registered names are rebuilt in place.
    ///
    /// # Errors
    /// [`ProcessError::UnknownProcess`] on the first unknown name; names
    /// before it stay registered.
    pub fn add_processes(&mut self, names: &[&str]) -> ProcessResult<()> {
        for name in names {
            let process = ProcessKind::from_name(name, &self.config)?;
            self.processes.insert(process.name().to_string(), process);
        }
        Ok(())
    }

    /// Unregister `names`. Unknown names are logged and skipped.
    pub fn remove_processes(&mut self, names: &[&str]) {
        for name in names {
            if self.processes.remove(*name).is_none() {
                log::warn!("cannot remove process `{name}`: not registered");
            }
        }
    }

    /// # Errors
    /// [`ProcessError::UnknownProcess`] when `name` is not registered.
    pub fn get_process(&self, name: &str) -> ProcessResult<&ProcessKind> {
        self.processes
            .get(name)
            .ok_or_else(|| ProcessError::UnknownProcess { name: name.to_string() })
    }

    /// `n` processes chosen independently and uniformly, with replacement.
    ///
    /// # Errors
    /// [`ProcessError::EmptyRegistry`] when nothing is registered.
    pub fn get_random_processes(
        &self, n: usize, rng: &mut dyn RngCore,
    ) -> ProcessResult<Vec<&ProcessKind>> {
        if self.processes.is_empty() {
            return Err(ProcessError::EmptyRegistry);
        }
        let registered: Vec<&ProcessKind> = self.processes.values().collect();
        Ok((0..n).map(|_| registered[rng.gen_range(0..registered.len())]).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Registered keys in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.processes.keys().map(String::as_str).collect()
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }
}

impl Default for ProcessStorage {
    /// Every built-in family with the default configuration.
    fn default() -> Self {
        let processes = ProcessKind::all(&ProcessConfig::default())
            .into_iter()
            .map(|process| (process.name().to_string(), process))
            .collect();
        ProcessStorage { config: ProcessConfig::default(), processes }
    }
}
