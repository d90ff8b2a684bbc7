// Dweve JMHPlot - JMH benchmark tables and charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Closed enumerations selecting what to plot.

use crate::error::BenchError;
use std::fmt;
use std::str::FromStr;

/// Input data distribution a benchmark ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Distribution {
    /// Points on a regular grid.
    #[cfg_attr(feature = "clap", value(name = "GRID"))]
    Grid,
    /// Uniformly random points.
    #[cfg_attr(feature = "clap", value(name = "RANDOM"))]
    Random,
}

impl Distribution {
    /// All known distributions.
    pub const ALL: [Distribution; 2] = [Distribution::Grid, Distribution::Random];

    /// The tag as it appears in benchmark parameters and tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Grid => "GRID",
            Distribution::Random => "RANDOM",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = BenchError;

    /// Tags match exactly; `grid` is not `GRID`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                BenchError::invalid_value(format!(
                    "unknown distribution {:?}, expected one of GRID, RANDOM",
                    s
                ))
            })
    }
}

/// Which metric a chart plots on its y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Microseconds per operation, plotted as measured.
    Time,
    /// Bytes allocated per operation.
    Mem,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::Mem => "mem",
        }
    }

    /// Pick this metric's value out of a row's two measurements.
    pub fn select(self, microseconds_per_op: f64, bytes_allocated_per_op: f64) -> f64 {
        match self {
            Metric::Time => microseconds_per_op,
            Metric::Mem => bytes_allocated_per_op,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Metric::Time),
            "mem" => Ok(Metric::Mem),
            other => Err(BenchError::invalid_value(format!(
                "unknown plot type {:?}, expected one of time, mem",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_round_trip() {
        for dist in Distribution::ALL {
            assert_eq!(dist.to_string().parse::<Distribution>().unwrap(), dist);
        }
    }

    #[test]
    fn test_distribution_is_case_sensitive() {
        assert!("grid".parse::<Distribution>().is_err());
        assert!("Random".parse::<Distribution>().is_err());
    }

    #[test]
    fn test_metric_parse() {
        assert_eq!("time".parse::<Metric>().unwrap(), Metric::Time);
        assert_eq!("mem".parse::<Metric>().unwrap(), Metric::Mem);
        assert!("ops".parse::<Metric>().is_err());
    }

    #[test]
    fn test_metric_select() {
        assert_eq!(Metric::Time.select(1.5, 8264.0), 1.5);
        assert_eq!(Metric::Mem.select(1.5, 8264.0), 8264.0);
    }
}
