// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Overlook crates. See the `examples/` directory.
