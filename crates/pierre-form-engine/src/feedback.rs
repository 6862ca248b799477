// ABOUTME: Localized feedback catalog for form issues, corrections, and strengths
// ABOUTME: Rule tables reference MessageKey identifiers; texts are rendered per Locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of user-facing feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Korean
    #[serde(rename = "ko")]
    Korean,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Ok(Self::English),
            "ko" | "ko-kr" | "ko_kr" | "korean" => Ok(Self::Korean),
            other => Err(format!("unsupported locale '{other}' (expected en or ko)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Korean => write!(f, "ko"),
        }
    }
}

/// Identifier of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum MessageKey {
    // Depth
    TooDeep,
    ControlDepth,
    DepthInsufficient,
    GoLower,
    GoodDepth,
    // Knees and legs
    KneesPastToes,
    KeepKneesBehindToes,
    KneesTracking,
    KneesBent,
    LockKnees,
    StraightLegs,
    // Torso
    LeaningForward,
    ChestUp,
    UprightTorso,
    // Stance
    UnevenStance,
    EvenOutFeet,
    StableStance,
    // Upper body
    ShallowRep,
    LowerChest,
    FullRange,
    ArmsBent,
    StraightenArms,
    StraightArms,
    // Body line
    HipsOutOfLine,
    BraceCore,
    StraightBody,
    NotHorizontal,
    GetIntoPosition,
    SteadyPosition,
    // Frame-level
    InsufficientVisibility,
    KeepGoing,
}

impl MessageKey {
    /// Text of this message in `locale`
    #[must_use]
    pub const fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english(),
            Locale::Korean => self.korean(),
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::TooDeep => "Squatting too deep",
            Self::ControlDepth => "Stop just below parallel and keep tension",
            Self::DepthInsufficient => "Depth insufficient",
            Self::GoLower => "Bend your knees more and lower your hips",
            Self::GoodDepth => "Good depth",
            Self::KneesPastToes => "Knees are travelling past your toes",
            Self::KeepKneesBehindToes => "Sit back so your knees stay behind your toes",
            Self::KneesTracking => "Knees are tracking well",
            Self::KneesBent => "Knees are bent",
            Self::LockKnees => "Straighten your legs",
            Self::StraightLegs => "Legs are straight",
            Self::LeaningForward => "Leaning too far forward",
            Self::ChestUp => "Lift your chest and keep your back straight",
            Self::UprightTorso => "Torso is upright",
            Self::UnevenStance => "Feet are uneven",
            Self::EvenOutFeet => "Plant both feet level, shoulder-width apart",
            Self::StableStance => "Stable stance",
            Self::ShallowRep => "Not going low enough",
            Self::LowerChest => "Lower your chest until your elbows reach 90 degrees",
            Self::FullRange => "Full range of motion",
            Self::ArmsBent => "Arms are bent",
            Self::StraightenArms => "Keep your arms straight under your shoulders",
            Self::StraightArms => "Arms are straight",
            Self::HipsOutOfLine => "Hips are out of line",
            Self::BraceCore => "Brace your core so shoulders, hips and ankles form a line",
            Self::StraightBody => "Body is in a straight line",
            Self::NotHorizontal => "Body is not in position",
            Self::GetIntoPosition => "Lower into a horizontal plank position",
            Self::SteadyPosition => "Steady position",
            Self::InsufficientVisibility => {
                "Insufficient visibility: step back so your whole body is in view"
            }
            Self::KeepGoing => "Keep going",
        }
    }

    const fn korean(self) -> &'static str {
        match self {
            Self::TooDeep => "너무 깊게 앉았습니다",
            Self::ControlDepth => "허벅지가 바닥과 평행한 지점에서 멈추고 긴장을 유지하세요",
            Self::DepthInsufficient => "깊이가 부족합니다",
            Self::GoLower => "무릎을 더 굽혀 엉덩이를 낮추세요",
            Self::GoodDepth => "깊이가 좋습니다",
            Self::KneesPastToes => "무릎이 발끝을 넘어갑니다",
            Self::KeepKneesBehindToes => "엉덩이를 뒤로 빼서 무릎이 발끝을 넘지 않게 하세요",
            Self::KneesTracking => "무릎 정렬이 좋습니다",
            Self::KneesBent => "무릎이 굽혀져 있습니다",
            Self::LockKnees => "다리를 곧게 펴세요",
            Self::StraightLegs => "다리가 곧게 펴져 있습니다",
            Self::LeaningForward => "상체가 너무 앞으로 기울었습니다",
            Self::ChestUp => "가슴을 들고 등을 곧게 펴세요",
            Self::UprightTorso => "상체가 곧게 서 있습니다",
            Self::UnevenStance => "발의 높이가 맞지 않습니다",
            Self::EvenOutFeet => "양발을 어깨너비로 평평하게 딛으세요",
            Self::StableStance => "자세가 안정적입니다",
            Self::ShallowRep => "충분히 내려가지 않았습니다",
            Self::LowerChest => "팔꿈치가 90도가 될 때까지 가슴을 내리세요",
            Self::FullRange => "가동 범위가 충분합니다",
            Self::ArmsBent => "팔이 굽혀져 있습니다",
            Self::StraightenArms => "팔을 어깨 아래에서 곧게 유지하세요",
            Self::StraightArms => "팔이 곧게 펴져 있습니다",
            Self::HipsOutOfLine => "엉덩이가 일직선에서 벗어났습니다",
            Self::BraceCore => "코어에 힘을 주어 어깨, 엉덩이, 발목을 일직선으로 만드세요",
            Self::StraightBody => "몸이 일직선입니다",
            Self::NotHorizontal => "자세가 잡히지 않았습니다",
            Self::GetIntoPosition => "몸을 낮춰 수평 플랭크 자세를 만드세요",
            Self::SteadyPosition => "자세가 안정적으로 유지되고 있습니다",
            Self::InsufficientVisibility => "몸 전체가 보이지 않습니다. 카메라에서 조금 물러나세요",
            Self::KeepGoing => "계속하세요",
        }
    }
}
