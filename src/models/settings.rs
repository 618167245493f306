use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::models::question::{Difficulty, QuestionType};

/// 每种题型可选的数量范围
pub const QUESTIONS_PER_TYPE_RANGE: RangeInclusive<u32> = 1..=10;

/// 难度勾选状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyLevels {
    pub easy: bool,
    pub moderate: bool,
    pub hard: bool,
}

impl Default for DifficultyLevels {
    fn default() -> Self {
        Self {
            easy: true,
            moderate: true,
            hard: true,
        }
    }
}

/// 出题设置
///
/// 默认值与原界面一致：选择、简答、编程三种题型，每种 3 道，三个难度全选。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub mcq: bool,
    pub short: bool,
    pub long: bool,
    pub coding: bool,
    pub questions_per_type: u32,
    pub difficulty_levels: DifficultyLevels,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            mcq: true,
            short: true,
            long: false,
            coding: true,
            questions_per_type: 3,
            difficulty_levels: DifficultyLevels::default(),
        }
    }
}

impl GenerationSettings {
    pub fn is_enabled(&self, question_type: QuestionType) -> bool {
        match question_type {
            QuestionType::MultipleChoice => self.mcq,
            QuestionType::ShortAnswer => self.short,
            QuestionType::LongAnswer => self.long,
            QuestionType::Coding => self.coding,
        }
    }

    pub fn is_difficulty_enabled(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Easy => self.difficulty_levels.easy,
            Difficulty::Moderate => self.difficulty_levels.moderate,
            Difficulty::Hard => self.difficulty_levels.hard,
        }
    }

    /// 已勾选的题型（固定顺序）
    pub fn enabled_types(&self) -> Vec<QuestionType> {
        QuestionType::ALL
            .into_iter()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }

    /// 已勾选的难度（固定顺序）
    pub fn enabled_difficulties(&self) -> Vec<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .filter(|d| self.is_difficulty_enabled(*d))
            .collect()
    }

    /// 每种题型的数量是否在允许范围内
    pub fn count_in_range(&self) -> bool {
        QUESTIONS_PER_TYPE_RANGE.contains(&self.questions_per_type)
    }

    /// 只保留给定题型
    pub fn set_types(&mut self, types: &[QuestionType]) {
        self.mcq = types.contains(&QuestionType::MultipleChoice);
        self.short = types.contains(&QuestionType::ShortAnswer);
        self.long = types.contains(&QuestionType::LongAnswer);
        self.coding = types.contains(&QuestionType::Coding);
    }

    /// 只保留给定难度
    pub fn set_difficulties(&mut self, difficulties: &[Difficulty]) {
        self.difficulty_levels = DifficultyLevels {
            easy: difficulties.contains(&Difficulty::Easy),
            moderate: difficulties.contains(&Difficulty::Moderate),
            hard: difficulties.contains(&Difficulty::Hard),
        };
    }
}
