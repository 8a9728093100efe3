//! Read-only helpers for list views: filtering and ordering albums.

use crate::library::Album;
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum AlbumOrder {
    /// Case-insensitive title, A to Z.
    Title,
    /// Last-modified date, newest first.
    #[default]
    Date,
}

/// Albums whose title contains `needle`, ignoring case. An empty needle
/// matches everything.
pub fn filter_by_title<'a>(albums: &'a [Album], needle: &str) -> Vec<&'a Album> {
    let needle = needle.to_lowercase();
    albums
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn sort_albums(albums: &mut [&Album], order: AlbumOrder, reverse: bool) {
    albums.sort_by(|a, b| {
        let ordering = compare(a, b, order);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare(a: &Album, b: &Album, order: AlbumOrder) -> Ordering {
    match order {
        AlbumOrder::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        AlbumOrder::Date => b.date.cmp(&a.date),
    }
}
