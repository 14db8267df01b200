// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Sequencing of a two-player match.
//!
//! The rules of a single placement or attack live on [`Player`][crate::Player] and
//! [`GameBoard`][crate::GameBoard]. This module adds turn order on top: [`Phase`] is the
//! state of a match, [`Step`] is something that happened, and [`transition`] is the pure
//! function that combines them. [`Match`] owns both players and applies [`transition`]
//! around every operation that advances the game.

pub use self::{
    flow::{transition, FlowError, Phase, Step},
    session::Match,
};

mod flow;
mod session;
