#![cfg(test)]

mod discovery;
mod shell;
mod support;
