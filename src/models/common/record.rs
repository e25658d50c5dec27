use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Resource;
use crate::errors::Result;

/// 远端服务持有的一类记录
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const RESOURCE: Resource;

    type Form: RecordForm<Record = Self>;

    fn id(&self) -> Option<i64>;
}

/// 与记录对应的编辑草稿，所有字段可选
pub trait RecordForm: Serialize + Default + Clone + Send + Sync + 'static {
    type Record: Record<Form = Self>;

    /// 以已有记录填充表单（进入编辑状态）
    fn from_record(record: &Self::Record) -> Self;

    /// 用补丁中出现的字段覆盖当前值
    fn merge(&mut self, patch: Self);

    /// 提交前的本地校验，不访问网络
    fn validate(&self) -> Result<()>;

    /// 请求体，缺失字段不出现
    fn to_body(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// 仅在补丁带值时覆盖
pub(crate) fn merge_field<T>(target: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *target = patch;
    }
}

/// 显式 null 与字段缺失同样取默认值
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
