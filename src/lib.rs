/**
 * 终端对局程序
 *
 * - game：对局记录、存储与走子服务
 * - ui：终端棋盘与命令循环
 */
pub mod game;
pub mod ui;
