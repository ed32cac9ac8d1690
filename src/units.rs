/*
 * Copyright 2015-2019 Ben Ashford
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Various re-occuring types that are used by the ElasticSearch API.
//!
//! E.g. `Duration`
//!
//! This isn't all types. Anything that is just a string or a number on the
//! wire is passed as such to the relevant `with_*` method.

use std::fmt;

use crate::operations::common::OptionVal;

/// The units by which duration is measured.
///
/// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/common-options.html#time-units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DurationUnit::Day => "d",
            DurationUnit::Hour => "h",
            DurationUnit::Minute => "m",
            DurationUnit::Second => "s",
            DurationUnit::Millisecond => "ms",
            DurationUnit::Microsecond => "micros",
            DurationUnit::Nanosecond => "nanos",
        })
    }
}

/// A time-period unit, will be formatted into the ElasticSearch standard format
///
/// # Examples
///
/// ```
/// use rs_esapi::units::{Duration, DurationUnit};
///
/// assert_eq!("100d", Duration::new(100, DurationUnit::Day).to_string());
/// assert_eq!("5m", Duration::minutes(5).to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    amt: i64,
    unit: DurationUnit,
}

impl Duration {
    pub fn new(amt: i64, unit: DurationUnit) -> Duration {
        Duration { amt, unit }
    }

    pub fn days(amt: i64) -> Duration {
        Duration::new(amt, DurationUnit::Day)
    }

    pub fn hours(amt: i64) -> Duration {
        Duration::new(amt, DurationUnit::Hour)
    }

    pub fn minutes(amt: i64) -> Duration {
        Duration::new(amt, DurationUnit::Minute)
    }

    pub fn seconds(amt: i64) -> Duration {
        Duration::new(amt, DurationUnit::Second)
    }

    pub fn milliseconds(amt: i64) -> Duration {
        Duration::new(amt, DurationUnit::Millisecond)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amt, self.unit)
    }
}

impl From<Duration> for OptionVal {
    fn from(from: Duration) -> OptionVal {
        OptionVal(from.to_string())
    }
}

impl From<DurationUnit> for OptionVal {
    fn from(from: DurationUnit) -> OptionVal {
        OptionVal(from.to_string())
    }
}

/// Declares an enum of fixed query-parameter values, with the wire spelling
/// of each variant.
macro_rules! option_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident => $wire:expr),+ $(,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(match *self {
                    $($name::$variant => $wire),+
                })
            }
        }

        impl From<$name> for OptionVal {
            fn from(from: $name) -> OptionVal {
                OptionVal(from.to_string())
            }
        }
    };
}

option_enum!(
    /// Values for the `version_type` parameter
    VersionType {
        Internal => "internal",
        External => "external",
        ExternalGte => "external_gte",
        Force => "force",
    }
);

option_enum!(
    /// Values for the `refresh` parameter of write operations
    Refresh {
        True => "true",
        False => "false",
        WaitFor => "wait_for",
    }
);

option_enum!(
    /// Values for the `op_type` parameter
    OpType {
        Index => "index",
        Create => "create",
    }
);

option_enum!(
    /// Which kinds of index a wildcard expression may expand to
    ExpandWildcards {
        Open => "open",
        Closed => "closed",
        Hidden => "hidden",
        None => "none",
        All => "all",
    }
);

option_enum!(
    SearchType {
        QueryThenFetch => "query_then_fetch",
        DfsQueryThenFetch => "dfs_query_then_fetch",
    }
);

option_enum!(
    /// Operator used by query-string queries
    DefaultOperator {
        And => "AND",
        Or => "OR",
    }
);

option_enum!(
    /// What to do when a by-query operation hits a version conflict
    Conflicts {
        Abort => "abort",
        Proceed => "proceed",
    }
);

option_enum!(
    /// Cluster and index health, used by `wait_for_status`
    HealthStatus {
        Green => "green",
        Yellow => "yellow",
        Red => "red",
    }
);

option_enum!(
    /// Level of detail for health and stats responses
    Level {
        Cluster => "cluster",
        Indices => "indices",
        Shards => "shards",
        Node => "node",
    }
);

option_enum!(
    /// Byte units for the cat APIs
    ByteUnit {
        B => "b",
        Kb => "kb",
        Mb => "mb",
        Gb => "gb",
        Tb => "tb",
        Pb => "pb",
    }
);

option_enum!(
    /// Priority of the events to wait for in cluster health
    WaitForEvents {
        Immediate => "immediate",
        Urgent => "urgent",
        High => "high",
        Normal => "normal",
        Low => "low",
        Languid => "languid",
    }
);

option_enum!(
    /// Thread state sampled by the hot threads API
    ThreadType {
        Cpu => "cpu",
        Wait => "wait",
        Block => "block",
    }
);

option_enum!(
    /// Grouping of the task list
    GroupBy {
        Nodes => "nodes",
        Parents => "parents",
        None => "none",
    }
);

#[cfg(test)]
pub mod tests {
    use super::{Duration, DurationUnit, ExpandWildcards, Refresh, VersionType};
    use crate::operations::common::OptionVal;

    #[test]
    fn test_duration_formats() {
        assert_eq!("1d", Duration::days(1).to_string());
        assert_eq!("30s", Duration::seconds(30).to_string());
        assert_eq!("250ms", Duration::milliseconds(250).to_string());
        assert_eq!("7micros", Duration::new(7, DurationUnit::Microsecond).to_string());
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!("wait_for", OptionVal::from(Refresh::WaitFor).0);
        assert_eq!("external_gte", OptionVal::from(VersionType::ExternalGte).0);
        assert_eq!("hidden", OptionVal::from(ExpandWildcards::Hidden).0);
    }
}
