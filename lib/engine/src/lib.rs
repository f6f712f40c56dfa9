/**
 * 国际象棋规则引擎核心库入口
 *
 * 说明
 * - square / piece：坐标与棋子
 * - board：局面及局面串的解析与生成
 * - moves：走法意图与走法串
 * - rules / check：走法合法性与将军判断（以 Board 方法的形式提供）
 * - engine：持有当前局面的门面
 * - protocol：面向标准输入输出的文本协议
 */
pub mod board;
pub mod check;
pub mod constant;
pub mod engine;
pub mod error;
pub mod moves;
pub mod piece;
pub mod protocol;
pub mod rules;
pub mod square;
