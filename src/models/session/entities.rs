use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课堂角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub enum Role {
    Teacher, // 教师
    Student, // 学生
}

impl Role {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => Self::TEACHER,
            Role::Student => Self::STUDENT,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            Role::TEACHER => Ok(Role::Teacher),
            Role::STUDENT => Ok(Role::Student),
            _ => Err(format!(
                "Invalid role: '{s}'. Supported roles: teacher, student"
            )),
        }
    }
}

/// 当前会话身份（本地输入的显示名与角色）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionIdentity {
    pub name: String,
    pub role: Role,
}

impl SessionIdentity {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}
