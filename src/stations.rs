/*  stations.rs -- Station registry
    This file is part of <https://github.com/uaf-acrc/night-and-day>.
    Copyright (C) 2024 the night-and-day authors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::error::RegistryError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_REGISTRY: &str = include_str!("../stations.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct StationEntry {
    /// Display name used in chart titles; sanitized for identifiers.
    pub name: String,
    /// ACIS station id for the metadata lookup.
    pub sid: String,
    /// 0/1 membership flags for the selector classes 1-4.
    pub classes: [u8; 4],
}

#[derive(Debug, Deserialize)]
pub struct Registry {
    pub station: Vec<StationEntry>,
}

impl Registry {
    /// The embedded default registry.
    pub fn builtin() -> Result<Self, RegistryError> {
        Ok(toml::from_str(DEFAULT_REGISTRY)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    /// Stations flagged for the given class (1-4), in registry order.
    pub fn select(&self, class: u8) -> Result<Vec<&StationEntry>, RegistryError> {
        let picked: Vec<_> = self
            .station
            .iter()
            .filter(|s| {
                class >= 1 && s.classes.get(usize::from(class) - 1).copied() == Some(1)
            })
            .collect();
        if picked.is_empty() {
            Err(RegistryError::EmptySelection(class))
        } else {
            Ok(picked)
        }
    }
}
