// src/types.rs
use crate::drivers::PlotFrame;

// 后台发给 GUI 的消息
#[derive(Clone, Debug)]
pub enum ScopeMessage {
    Log(String),
    Connected(String), // 数据源描述
    Frame(PlotFrame),  // 绘图数据
    Fatal(String),     // 读取/解析失败，循环已结束
    Stopped,           // 用户中断
}
