mod commands;
mod helpers;
mod layers;
mod ui_fragments;
