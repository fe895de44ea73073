use crossbeam::queue::ArrayQueue;
use garde::Validate;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::ops::{Deref, DerefMut};

/// 新建缓冲区的最小初始容量
pub const MIN_INITIAL_CAPACITY: usize = 512;

/// BufferPool 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault, Validate)]
#[serde(default)]
pub struct BufferPoolConfig {
    /// 新建缓冲区的初始容量
    #[default = 512]
    #[garde(range(min = 512))]
    pub initial_capacity: usize,

    /// 超过该容量的缓冲区不再放回池中
    #[default = 65536]
    #[garde(range(min = 512))]
    pub max_retained_capacity: usize,

    /// 池中最多保留的缓冲区数量
    #[default = 256]
    #[garde(range(min = 1))]
    pub max_pooled: usize,
}

/// 可复用的字节缓冲池
///
/// 基于无锁队列，多线程并发 acquire / release 不需要调用方加锁
pub struct BufferPool {
    queue: ArrayQueue<Vec<u8>>,
    initial_capacity: usize,
    max_retained_capacity: usize,
}

impl BufferPool {
    /// 容量配置低于下限时按下限处理，不依赖调用方先做校验
    pub fn new(config: BufferPoolConfig) -> Self {
        let initial_capacity = config.initial_capacity.max(MIN_INITIAL_CAPACITY);
        Self {
            queue: ArrayQueue::new(config.max_pooled.max(1)),
            initial_capacity,
            max_retained_capacity: config.max_retained_capacity.max(initial_capacity),
        }
    }

    /// 取出一个长度为 0 的缓冲区，池为空时新建
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buf = self
            .queue
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.initial_capacity));
        PooledBuffer { buf, pool: self }
    }

    /// 归还缓冲区
    ///
    /// 容量超过上限或池已满时直接丢弃
    pub fn release(&self, mut buf: Vec<u8>) {
        if buf.capacity() > self.max_retained_capacity {
            return;
        }
        buf.clear();
        let _ = self.queue.push(buf);
    }

    /// 当前池中空闲缓冲区数量
    pub fn idle(&self) -> usize {
        self.queue.len()
    }

    pub fn max_retained_capacity(&self) -> usize {
        self.max_retained_capacity
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(BufferPoolConfig::default())
    }
}

crate::impl_from!(BufferPoolConfig => BufferPool);

/// 借出的缓冲区，drop 时自动归还
pub struct PooledBuffer<'a> {
    buf: Vec<u8>,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        // Vec::new 不分配内存
        let buf = std::mem::take(&mut self.buf);
        self.pool.release(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_config_default() {
        let config = BufferPoolConfig::default();
        assert_eq!(config.initial_capacity, 512);
        assert_eq!(config.max_retained_capacity, 64 * 1024);
        assert_eq!(config.max_pooled, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = BufferPoolConfig {
            initial_capacity: 128,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BufferPoolConfig {
            max_pooled: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retained_capacity_never_below_initial() {
        let pool = BufferPool::new(BufferPoolConfig {
            initial_capacity: 4096,
            max_retained_capacity: 1024,
            ..Default::default()
        });
        assert_eq!(pool.max_retained_capacity(), 4096);
    }

    #[test]
    fn test_initial_capacity_clamped_without_validation() {
        let pool = BufferPool::from(BufferPoolConfig {
            initial_capacity: 0,
            max_retained_capacity: 0,
            max_pooled: 0,
        });
        assert!(pool.acquire().capacity() >= MIN_INITIAL_CAPACITY);
        assert_eq!(pool.max_retained_capacity(), MIN_INITIAL_CAPACITY);

        pool.release(Vec::with_capacity(MIN_INITIAL_CAPACITY));
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_acquire_returns_empty_buffer_with_capacity() {
        let pool = BufferPool::default();
        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 512);
    }

    #[test]
    fn test_buffer_is_reused() {
        let pool = BufferPool::default();
        {
            let mut buf = pool.acquire();
            buf.extend_from_slice(b"hello");
        }
        assert_eq!(pool.idle(), 1);

        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_oversized_buffer_is_dropped() {
        let pool = BufferPool::default();
        {
            let mut buf = pool.acquire();
            buf.extend(std::iter::repeat(b'x').take(100 * 1024));
            assert!(buf.capacity() > pool.max_retained_capacity());
        }
        assert_eq!(pool.idle(), 0);

        for _ in 0..32 {
            let mut buf = pool.acquire();
            buf.extend(std::iter::repeat(b'x').take(70 * 1024));
        }
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_release_when_full() {
        let pool = BufferPool::new(BufferPoolConfig {
            max_pooled: 2,
            ..Default::default()
        });
        for _ in 0..5 {
            pool.release(Vec::with_capacity(512));
        }
        assert_eq!(pool.idle(), 2);
    }

    #[test]
    fn test_concurrent_acquire_release() {
        let pool = Arc::new(BufferPool::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = Arc::clone(&pool);
                std::thread::spawn(move || {
                    for j in 0..1000 {
                        let mut buf = pool.acquire();
                        assert!(buf.is_empty());
                        buf.extend_from_slice(format!("{}-{}", i, j).as_bytes());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(pool.idle() >= 1);
        assert!(pool.idle() <= 8);
    }
}
