//! 国データと地域の定義

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// API へ要求するフィールド射影
pub const FIELDS: &str = "alpha3Code,name,flags,population,region,capital";

/// 国旗画像の URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
}

/// 国レコード（外部から与えられ、読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    /// 地域名（比較時は大文字小文字を区別しない）
    #[serde(default)]
    pub region: String,
    pub alpha3_code: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
}

impl CountryRecord {
    /// リスト描画用の安定キー（alpha3Code + name）
    pub fn list_key(&self) -> String {
        format!("{}{}", self.alpha3_code, self.name)
    }

    /// 首都の表示文字列（未設定・空なら "-"）
    pub fn capital_display(&self) -> &str {
        self.capital
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("-")
    }

    /// 人口を 3 桁区切りで表示
    pub fn population_display(&self) -> String {
        group_thousands(self.population)
    }
}

/// 数値を 3 桁ごとにカンマで区切る
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 地理的地域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    /// 小文字の地域名
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::Oceania => "oceania",
        }
    }

    /// レコードの地域がこの地域と一致するか（case-insensitive）
    pub fn matches(&self, region: &str) -> bool {
        region.to_lowercase() == self.as_str()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 地域セレクタの選択肢（"all" は未設定と等価）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum RegionOption {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl RegionOption {
    /// メニューの表示順
    pub fn all() -> &'static [RegionOption] {
        &[
            RegionOption::All,
            RegionOption::Africa,
            RegionOption::Americas,
            RegionOption::Asia,
            RegionOption::Europe,
            RegionOption::Oceania,
        ]
    }

    /// 選択肢に対応する地域フィルタ（All は None）
    pub fn region(&self) -> Option<Region> {
        match self {
            RegionOption::All => None,
            RegionOption::Africa => Some(Region::Africa),
            RegionOption::Americas => Some(Region::Americas),
            RegionOption::Asia => Some(Region::Asia),
            RegionOption::Europe => Some(Region::Europe),
            RegionOption::Oceania => Some(Region::Oceania),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionOption::All => "All",
            RegionOption::Africa => "Africa",
            RegionOption::Americas => "Americas",
            RegionOption::Asia => "Asia",
            RegionOption::Europe => "Europe",
            RegionOption::Oceania => "Oceania",
        }
    }
}

#[cfg(test)]
#[path = "country_test.rs"]
mod country_test;
