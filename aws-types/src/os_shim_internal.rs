/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Environment access that tests can replace with a fixed set of variables

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Where region and user-agent lookups read environment variables from
///
/// `Env::real()` reads the process environment. `Env::from_slice` gives every test its own
/// variables, so tests that set `AWS_REGION` do not race each other. Clones share one map.
#[derive(Clone, Debug)]
pub struct Env(Arc<Source>);

#[derive(Debug)]
enum Source {
    Process,
    Fixed(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Env::real()
    }
}

impl Env {
    /// Look up `name`, reporting an absent variable as [`VarError::NotPresent`]
    pub fn get(&self, name: &str) -> Result<String, VarError> {
        match &*self.0 {
            Source::Process => std::env::var(name),
            Source::Fixed(vars) => vars.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }

    /// An environment holding exactly `vars`
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(env.get("AWS_REGION").as_deref(), Ok("eu-west-1"));
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        vars.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    pub fn real() -> Self {
        Env(Arc::new(Source::Process))
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Env(Arc::new(Source::Fixed(vars)))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn fixed_variables_are_isolated() {
        let env = Env::from_slice(&[("AWS_REGION", "eu-central-1")]);
        assert_eq!(env.get("AWS_REGION").as_deref(), Ok("eu-central-1"));
        assert_eq!(env.get("AWS_DEFAULT_REGION"), Err(VarError::NotPresent));
        assert_eq!(env.clone().get("AWS_REGION"), env.get("AWS_REGION"));
    }
}
