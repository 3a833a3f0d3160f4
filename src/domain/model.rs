use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// 設定檔的原始兩行，未經解析
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfiguration {
    pub header: Vec<u8>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub version: u32,
    pub data: HashMap<String, String>,
}

impl Configuration {
    /// 取得某方向的模式字串，缺少時回傳空字串
    pub fn mode_for(&self, direction: Direction) -> &str {
        self.data
            .get(direction.key())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Command {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dhcp,
    Static,
}

impl Mode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dhcp" => Some(Mode::Dhcp),
            "static" => Some(Mode::Static),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dhcp => "dhcp",
            Mode::Static => "static",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// 依計算順序排列：先 down 再 up
    pub const ORDER: [Direction; 2] = [Direction::Down, Direction::Up];

    pub fn key(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
