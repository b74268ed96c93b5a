//! フィルタロジック
//!
//! 入力順を保ったまま絞り込む。該当なしは空の Vec でありエラーではない。

use crate::country::{CountryRecord, Region};

/// 地域で絞り込む
///
/// - `region` が None なら全件返却
/// - レコードの `region` を case-insensitive に比較
pub fn by_region<'a, I>(records: I, region: Option<Region>) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    match region {
        None => records.into_iter().collect(),
        Some(region) => records
            .into_iter()
            .filter(|c| region.matches(&c.region))
            .collect(),
    }
}

/// 検索テキストで絞り込む
///
/// - `query` が空なら全件返却
/// - case-insensitive な部分一致で `name` を検索
pub fn by_text<'a, I>(records: I, query: &str) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let query = query.to_lowercase();
    records
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .collect()
}

/// 表示対象を導出（地域 → テキストの順に適用）
pub fn derive_visible<'a>(
    records: &'a [CountryRecord],
    region: Option<Region>,
    query: &str,
) -> Vec<&'a CountryRecord> {
    by_text(by_region(records, region), query)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
