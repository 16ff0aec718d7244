#![cfg(test)]

mod properties;
mod workflow;
