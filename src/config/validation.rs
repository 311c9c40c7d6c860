//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route paths and parameter syntax
//! - Compile every constraint once so bad patterns fail at load, not at first request
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTableConfig → Result<(), Vec<ValidationError>>
//! - Runs before the route table is turned into a tree

use regex::Regex;
use thiserror::Error;

use crate::config::schema::RouteTableConfig;
use crate::mux::segment;

/// A semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("namespace #{index} is empty")]
    EmptySeededNamespace { index: usize },

    #[error("route #{index}: namespace is empty")]
    EmptyNamespace { index: usize },

    #[error("route #{index}: path {path:?} must start with '/'")]
    RelativePath { index: usize, path: String },

    #[error("route #{index}: handler is empty")]
    EmptyHandler { index: usize },

    #[error("route #{index}: segment {segment:?} has unbalanced constraint brackets")]
    UnbalancedConstraint { index: usize, segment: String },

    #[error("route #{index}: segment {segment:?} has no parameter name")]
    EmptyParamName { index: usize, segment: String },

    #[error("route #{index}: invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },
}

/// Validate a route table, collecting every error found.
pub fn validate_config(config: &RouteTableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, name) in config.namespaces.iter().enumerate() {
        if name.is_empty() {
            errors.push(ValidationError::EmptySeededNamespace { index });
        }
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.namespace.is_empty() {
            errors.push(ValidationError::EmptyNamespace { index });
        }
        if route.handler.is_empty() {
            errors.push(ValidationError::EmptyHandler { index });
        }
        if !route.path.starts_with(segment::PATH_DELIMITER) {
            errors.push(ValidationError::RelativePath {
                index,
                path: route.path.clone(),
            });
        }

        for seg in segment::split_path(&route.path).filter(|s| segment::is_dynamic(s)) {
            validate_param_segment(index, seg, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_param_segment(index: usize, seg: &str, errors: &mut Vec<ValidationError>) {
    let left = seg.find(segment::LEFT_PATTERN_DELIMITER);
    let right = seg.rfind(segment::RIGHT_PATTERN_DELIMITER);
    let balanced = match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => l < r && r == seg.len() - 1,
        _ => false,
    };
    if !balanced {
        errors.push(ValidationError::UnbalancedConstraint {
            index,
            segment: seg.to_string(),
        });
        return;
    }

    if segment::extract_param_name(seg).is_empty() {
        errors.push(ValidationError::EmptyParamName {
            index,
            segment: seg.to_string(),
        });
    }

    let pattern = segment::extract_pattern(seg);
    if let Err(e) = Regex::new(pattern) {
        errors.push(ValidationError::InvalidPattern {
            index,
            pattern: pattern.to_string(),
            reason: e.to_string(),
        });
    }
}
