/// 一次用户操作的结果；错误已经以提示形式告知用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// 本地校验未通过，未发出请求
    Invalid,
    /// 用户取消了破坏性操作
    Declined,
    /// 请求失败，界面状态保持不变
    Failed,
    /// 没有可执行的对象（例如没有草稿）
    Ignored,
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// 命令行退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed | Outcome::Declined => 0,
            Outcome::Invalid | Outcome::Ignored => 2,
            Outcome::Failed => 1,
        }
    }
}
